// libavrc/src/protocol/responses/mod.rs

pub mod element_attrs;
pub mod notification;
pub mod pass_through;
pub mod vendor;
pub mod volume;

pub use element_attrs::{
    AttributeEntry, AttributeSlot, ElementAttributesResult, decode_element_attributes,
};
pub use notification::{NotificationParam, NotificationResult, decode_register_notification};
pub use pass_through::decode_pass_through;
pub use vendor::{VendorHeader, decode_vendor, decode_vendor_body};
pub use volume::{VolumeResult, decode_set_absolute_volume};

use crate::constants::BT_SIG_COMPANY_ID;
use crate::decoder::Decoder;
use crate::protocol::frame::Message;
use crate::types::{Opcode, PassThroughGroup, Status};
use crate::{Error, Result};

/// PDU-specific body of a decoded response. Per-PDU decoders live in
/// `protocol::responses::<name>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Payload {
    ElementAttributes(ElementAttributesResult),
    Notification(NotificationResult),
    Volume(VolumeResult),
    PassThrough(PassThroughGroup),
}

/// Result record produced for every parsed message.
///
/// `opcode` and `status` are always set. `pdu` is set once the vendor
/// envelope (or pass-through group) was read, `payload` only on success.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Response {
    pub opcode: Opcode,
    pub status: Status,
    pub pdu: Option<u8>,
    pub payload: Option<Payload>,
    pub error: Option<Error>,
}

impl Response {
    fn new(opcode: Opcode) -> Self {
        Self {
            opcode,
            status: Status::NO_ERROR,
            pdu: None,
            payload: None,
            error: None,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Convert the record into a `Result`, dropping the envelope fields.
    pub fn into_result(self) -> Result<Payload> {
        match (self.error, self.payload) {
            (Some(err), _) => Err(err),
            (None, Some(payload)) => Ok(payload),
            (None, None) => Err(Error::InternalError("response without payload".into())),
        }
    }

    pub fn element_attributes(&self) -> Option<&ElementAttributesResult> {
        match &self.payload {
            Some(Payload::ElementAttributes(res)) => Some(res),
            _ => None,
        }
    }

    pub fn notification(&self) -> Option<&NotificationResult> {
        match &self.payload {
            Some(Payload::Notification(res)) => Some(res),
            _ => None,
        }
    }

    pub fn volume(&self) -> Option<&VolumeResult> {
        match &self.payload {
            Some(Payload::Volume(res)) => Some(res),
            _ => None,
        }
    }
}

/// Parse a response message with the default decoder.
pub fn parse_response(msg: &Message<'_>) -> Response {
    Decoder::default().parse_response(msg)
}

pub(crate) fn parse_with(decoder: &Decoder, msg: &Message<'_>) -> Response {
    let observer = decoder.observer();
    observer.on_dispatch(msg.opcode, msg.ctype);

    let mut resp = Response::new(msg.opcode);
    let outcome = match msg.opcode {
        Opcode::Vendor => match msg.company_id {
            // a message built without a frame header carries no company id
            Some(company) if company != BT_SIG_COMPANY_ID => {
                Err(Error::UnsupportedCompany(company))
            }
            _ => decode_vendor(msg.ctype, msg.body, decoder).and_then(|(header, body)| {
                resp.pdu = Some(header.pdu);
                body
            }),
        },
        Opcode::PassThrough => decode_pass_through(msg.body).map(|group| {
            // group ids are 0 or 1
            resp.pdu = Some(group.as_u16() as u8);
            Payload::PassThrough(group)
        }),
        Opcode::Unknown(op) => Err(Error::UnknownOpcode(op)),
    };

    match outcome {
        Ok(payload) => resp.payload = Some(payload),
        Err(err) => {
            observer.on_error(msg.opcode, &err);
            resp.status = err.status();
            resp.error = Some(err);
        }
    }
    resp
}
