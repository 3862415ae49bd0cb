// libavrc/src/observer.rs

//! Observability hooks called by the decoder at fixed points.
//!
//! The decoder never logs on its own: it reports to the `DecodeObserver`
//! owned by the `Decoder`. `LogObserver` forwards to the `log` facade and is
//! what `Decoder::default()` uses.

use log::{debug, trace, warn};

use crate::Error;
use crate::protocol::responses::{AttributeEntry, VendorHeader};
use crate::types::{Opcode, ResponseType};
use crate::utils::bytes_to_hex_spaced;

/// Hook points reached while decoding a response. Every method has an
/// empty default so implementors only override what they need.
pub trait DecodeObserver: Send + Sync {
    /// The top-level parser picked a decoder for `opcode`.
    fn on_dispatch(&self, _opcode: Opcode, _ctype: ResponseType) {}

    /// The vendor envelope was read.
    fn on_vendor_header(&self, _ctype: ResponseType, _header: &VendorHeader) {}

    /// An element attribute list announced `num_attr` entries.
    fn on_attribute_count(&self, _num_attr: u8) {}

    /// Entry `index` of an attribute list was decoded.
    fn on_attribute(&self, _index: usize, _entry: &AttributeEntry) {}

    /// Entry `index` carried an id outside the media attribute range.
    fn on_invalid_attribute(&self, _index: usize, _id: u32) {}

    /// Decoding failed; the error is about to be stamped into the result.
    fn on_error(&self, _opcode: Opcode, _err: &Error) {}
}

impl<T: DecodeObserver + ?Sized> DecodeObserver for std::sync::Arc<T> {
    fn on_dispatch(&self, opcode: Opcode, ctype: ResponseType) {
        (**self).on_dispatch(opcode, ctype)
    }

    fn on_vendor_header(&self, ctype: ResponseType, header: &VendorHeader) {
        (**self).on_vendor_header(ctype, header)
    }

    fn on_attribute_count(&self, num_attr: u8) {
        (**self).on_attribute_count(num_attr)
    }

    fn on_attribute(&self, index: usize, entry: &AttributeEntry) {
        (**self).on_attribute(index, entry)
    }

    fn on_invalid_attribute(&self, index: usize, id: u32) {
        (**self).on_invalid_attribute(index, id)
    }

    fn on_error(&self, opcode: Opcode, err: &Error) {
        (**self).on_error(opcode, err)
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl DecodeObserver for NoopObserver {}

/// Forwards events to the `log` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl DecodeObserver for LogObserver {
    fn on_dispatch(&self, opcode: Opcode, ctype: ResponseType) {
        debug!("parse response: opcode={:#04x} ctype={}", opcode.as_u8(), ctype);
    }

    fn on_vendor_header(&self, ctype: ResponseType, header: &VendorHeader) {
        debug!(
            "vendor response: ctype={} pdu={:#04x} len={}",
            ctype, header.pdu, header.declared_len
        );
    }

    fn on_attribute_count(&self, num_attr: u8) {
        debug!("element attributes: num_attr={}", num_attr);
    }

    fn on_attribute(&self, index: usize, entry: &AttributeEntry) {
        trace!(
            "element attribute[{}]: id={} charset={:#06x} len={} text=[{}]",
            index,
            entry.id,
            entry.charset_id,
            entry.text.len(),
            bytes_to_hex_spaced(&entry.text)
        );
    }

    fn on_invalid_attribute(&self, index: usize, id: u32) {
        warn!("element attribute[{}]: invalid attribute id {:#010x}", index, id);
    }

    fn on_error(&self, opcode: Opcode, err: &Error) {
        match err {
            // a reject is a normal peer answer, not a decode fault
            Error::Rejected(_) => debug!("opcode {:#04x}: {}", opcode.as_u8(), err),
            _ => warn!("opcode {:#04x}: {}", opcode.as_u8(), err),
        }
    }
}
