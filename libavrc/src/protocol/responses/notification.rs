// libavrc/src/protocol/responses/notification.rs

use crate::protocol::parser::Cursor;
use crate::types::{EventId, ResponseType, Volume};
use crate::Result;

/// Event-specific parameter of a notification response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NotificationParam {
    Volume(Volume),
    /// Event accepted but its parameter is not interpreted.
    Undecoded,
}

/// Register Notification response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NotificationResult {
    pub event_id: u8,
    pub status: ResponseType,
    pub param: NotificationParam,
}

impl NotificationResult {
    pub fn event(&self) -> Option<EventId> {
        EventId::from_u8(self.event_id)
    }
}

/// Decode RegisterNotification response payload (pdu = 0x31)
/// Layout: event_id(1) + event parameter (volume(1) for VolumeChanged)
///
/// Only the volume parameter is decoded, and only for the ctypes a volume
/// notification can arrive with. Every other event leaves the parameter
/// `Undecoded`.
pub fn decode_register_notification(
    ctype: ResponseType,
    cursor: &mut Cursor<'_>,
) -> Result<NotificationResult> {
    let event_id = cursor.read_u8()?;

    let carries_volume = matches!(
        ctype,
        ResponseType::Changed
            | ResponseType::Interim
            | ResponseType::Rejected
            | ResponseType::NotImplemented
    );

    let param = match EventId::from_u8(event_id) {
        Some(EventId::VolumeChanged) if carries_volume => {
            NotificationParam::Volume(Volume::from_raw(cursor.read_u8()?))
        }
        _ => NotificationParam::Undecoded,
    };

    Ok(NotificationResult {
        event_id,
        status: ctype,
        param,
    })
}
