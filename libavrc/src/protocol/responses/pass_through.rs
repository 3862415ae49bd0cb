// libavrc/src/protocol/responses/pass_through.rs

use crate::constants::{BT_SIG_COMPANY_ID, PASS_THRU_GROUP_LEN, PASS_THRU_OP_VENDOR, PASS_THRU_STATE_MASK};
use crate::protocol::parser::Cursor;
use crate::types::PassThroughGroup;
use crate::{Error, Result};

/// Decode a pass-through response body.
/// Layout: state|op_id(1) + operand_len(1) + company_id(3) + vendor_unique_id(2)
///
/// Only the Bluetooth SIG group navigation operations are recognised; any
/// other pass-through is reported as `BadCommand` carrying the op id.
pub fn decode_pass_through(data: &[u8]) -> Result<PassThroughGroup> {
    let mut cursor = Cursor::new(data);
    let op_id = cursor.read_u8()? & !PASS_THRU_STATE_MASK;
    let operand_len = cursor.read_u8()?;
    if op_id != PASS_THRU_OP_VENDOR || operand_len != PASS_THRU_GROUP_LEN {
        return Err(Error::BadCommand(op_id));
    }

    let company_id = cursor.read_u24_be()?;
    if company_id != BT_SIG_COMPANY_ID {
        return Err(Error::BadCommand(op_id));
    }

    let id = cursor.read_u16_be()?;
    PassThroughGroup::from_u16(id).ok_or(Error::BadCommand(op_id))
}
