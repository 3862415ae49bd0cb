// libavrc/src/protocol/frame.rs

use crate::constants::{AVC_HEADER_LEN, BT_SIG_COMPANY_ID, COMPANY_ID_LEN};
use crate::protocol::parser::Cursor;
use crate::types::{Opcode, ResponseType};
use crate::{Error, Result};

/// A single, already reassembled AVRCP response handed to the parser.
///
/// `body` starts at the vendor envelope for vendor-dependent messages and
/// at the operation id for pass-through messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Message<'a> {
    pub ctype: ResponseType,
    pub opcode: Opcode,
    pub company_id: Option<u32>,
    pub body: &'a [u8],
}

impl<'a> Message<'a> {
    pub fn new(ctype: ResponseType, opcode: Opcode, body: &'a [u8]) -> Self {
        Self {
            ctype,
            opcode,
            company_id: None,
            body,
        }
    }

    /// Vendor-dependent message from the Bluetooth SIG company id.
    pub fn vendor(ctype: ResponseType, body: &'a [u8]) -> Self {
        Self {
            ctype,
            opcode: Opcode::Vendor,
            company_id: Some(BT_SIG_COMPANY_ID),
            body,
        }
    }

    pub fn pass_through(ctype: ResponseType, body: &'a [u8]) -> Self {
        Self::new(ctype, Opcode::PassThrough, body)
    }
}

/// AV/C frame helper. Splits a response frame into a `Message`.
/// Format: [ctype(1)] [subunit_type|subunit_id(1)] [opcode(1)] [company_id(3), vendor only] [body(n)]
/// Only the low nibble of the first byte carries the ctype.
pub struct Frame;

impl Frame {
    /// Decode a full AV/C response frame. The returned message borrows its
    /// body from `frame`.
    pub fn decode(frame: &[u8]) -> Result<Message<'_>> {
        if frame.len() < AVC_HEADER_LEN {
            return Err(Error::TruncatedInput {
                expected: AVC_HEADER_LEN,
                actual: frame.len(),
            });
        }

        let mut cursor = Cursor::new(frame);
        let ctype = ResponseType::try_from(cursor.read_u8()? & 0x0F)?;
        let _subunit = cursor.read_u8()?;
        let opcode = Opcode::from(cursor.read_u8()?);

        let company_id = match opcode {
            Opcode::Vendor => {
                if cursor.remaining() < COMPANY_ID_LEN {
                    return Err(Error::FrameFormat("vendor frame without company id".into()));
                }
                Some(cursor.read_u24_be()?)
            }
            _ => None,
        };

        Ok(Message {
            ctype,
            opcode,
            company_id,
            body: cursor.rest(),
        })
    }
}
