// libavrc/src/protocol/responses/vendor.rs

use crate::decoder::Decoder;
use crate::protocol::parser::Cursor;
use crate::types::{PduId, ResponseType, Status};
use crate::{Error, Result};

use super::Payload;
use super::element_attrs::decode_element_attributes;
use super::notification::decode_register_notification;
use super::volume::decode_set_absolute_volume;

/// Common envelope of every vendor-dependent response.
/// Layout: pdu(1) + packet_type(1) + length(2, BE)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VendorHeader {
    pub pdu: u8,
    pub packet_type: u8,
    pub declared_len: u16,
}

impl VendorHeader {
    /// Read the envelope and check that the declared length fits in what
    /// is left of the buffer.
    pub fn decode(cursor: &mut Cursor<'_>) -> Result<Self> {
        let pdu = cursor.read_u8()?;
        let packet_type = cursor.read_u8()?;
        let declared_len = cursor.read_u16_be()?;
        cursor.require(declared_len as usize)?;
        Ok(Self {
            pdu,
            packet_type,
            declared_len,
        })
    }
}

/// Decode the body following a vendor envelope.
///
/// A REJECTED response carries only a status byte; it is returned as
/// `Error::Rejected` without looking at anything else in the buffer.
pub fn decode_vendor_body(
    header: &VendorHeader,
    ctype: ResponseType,
    cursor: &mut Cursor<'_>,
    decoder: &Decoder,
) -> Result<Payload> {
    if ctype == ResponseType::Rejected {
        let status = cursor.read_u8()?;
        return Err(Error::Rejected(Status::new(status)));
    }

    match PduId::try_from(header.pdu)? {
        PduId::GetElementAttributes => {
            let num_attr = cursor.read_u8()?;
            if header.declared_len == 0 {
                return Err(Error::InternalError(format!(
                    "get element attributes: {} attributes with zero declared length",
                    num_attr
                )));
            }
            decode_element_attributes(cursor, num_attr, decoder).map(Payload::ElementAttributes)
        }
        PduId::SetAbsoluteVolume => {
            decode_set_absolute_volume(header, cursor).map(Payload::Volume)
        }
        PduId::RegisterNotification => {
            decode_register_notification(ctype, cursor).map(Payload::Notification)
        }
    }
}

/// Decode a complete vendor-dependent response body (envelope + payload).
///
/// The outer `Result` fails only when the envelope itself cannot be read;
/// once the header is known it is returned alongside the body outcome so
/// callers can record the pdu of a response whose payload is bad.
pub fn decode_vendor(
    ctype: ResponseType,
    data: &[u8],
    decoder: &Decoder,
) -> Result<(VendorHeader, Result<Payload>)> {
    let mut cursor = Cursor::new(data);
    let header = VendorHeader::decode(&mut cursor)?;
    decoder.observer().on_vendor_header(ctype, &header);
    let body = decode_vendor_body(&header, ctype, &mut cursor, decoder);
    Ok((header, body))
}
