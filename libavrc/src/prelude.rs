// libavrc/src/prelude.rs

pub use crate::config::{DecoderConfig, InvalidAttributePolicy};
pub use crate::decoder::{Decoder, DecoderBuilder};
pub use crate::observer::{DecodeObserver, LogObserver, NoopObserver};
pub use crate::protocol::{
    AttributeEntry, AttributeSlot, ElementAttributesResult, Frame, Message, NotificationParam,
    NotificationResult, Payload, Response, VolumeResult, parse_response,
};
pub use crate::{
    AttributeId, Error, EventId, Opcode, PassThroughGroup, PduId, ResponseType, Result, Status,
    Volume,
};

// Re-export small utilities for convenience
pub use crate::utils::bytes_to_hex_spaced;
