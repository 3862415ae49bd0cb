// libavrc/src/protocol/responses/volume.rs

use crate::protocol::parser::Cursor;
use crate::protocol::responses::VendorHeader;
use crate::types::Volume;
use crate::{Error, Result};

/// Set Absolute Volume response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VolumeResult {
    pub volume: Volume,
}

/// Decode SetAbsoluteVolume response payload (pdu = 0x50)
/// Layout: volume(1), declared length must be exactly 1
pub fn decode_set_absolute_volume(
    header: &VendorHeader,
    cursor: &mut Cursor<'_>,
) -> Result<VolumeResult> {
    if header.declared_len != 1 {
        return Err(Error::InternalError(format!(
            "set absolute volume: declared length {} != 1",
            header.declared_len
        )));
    }
    let raw = cursor.read_u8()?;
    Ok(VolumeResult {
        volume: Volume::from_raw(raw),
    })
}
