//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers build wire payloads so tests across the crate and the
//! tests/ directory describe responses the same way.
#![allow(dead_code)]

use std::sync::Mutex;

use crate::Error;
use crate::constants::{AVC_OP_VENDOR, BT_SIG_COMPANY_ID, PASS_THRU_GROUP_LEN, PASS_THRU_OP_VENDOR};
use crate::observer::DecodeObserver;
use crate::protocol::responses::{AttributeEntry, VendorHeader};
use crate::types::{Opcode, ResponseType};

/// Encode one element attribute entry:
/// attr_id(4) + charset_id(2) + str_len(2) + text
#[doc(hidden)]
pub fn attribute_entry_bytes(attr_id: u32, charset_id: u16, text: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(8 + text.len());
    out.extend_from_slice(&attr_id.to_be_bytes());
    out.extend_from_slice(&charset_id.to_be_bytes());
    out.extend_from_slice(&(text.len() as u16).to_be_bytes());
    out.extend_from_slice(text);
    out
}

/// Wrap `body` in a vendor envelope whose declared length matches the body.
#[doc(hidden)]
pub fn vendor_payload(pdu: u8, body: &[u8]) -> Vec<u8> {
    let mut out = vec![pdu, 0x00];
    out.extend_from_slice(&(body.len() as u16).to_be_bytes());
    out.extend_from_slice(body);
    out
}

/// Build a full AV/C vendor-dependent response frame (panel subunit).
#[doc(hidden)]
pub fn vendor_frame(ctype: ResponseType, vendor_body: &[u8]) -> Vec<u8> {
    let mut out = vec![ctype.as_u8(), 0x48, AVC_OP_VENDOR];
    out.extend_from_slice(&BT_SIG_COMPANY_ID.to_be_bytes()[1..]);
    out.extend_from_slice(vendor_body);
    out
}

/// Pass-through body for a group navigation operation.
#[doc(hidden)]
pub fn pass_through_group_body(group_id: u16, released: bool) -> Vec<u8> {
    let state = if released { 0x80 } else { 0x00 };
    let mut out = vec![state | PASS_THRU_OP_VENDOR, PASS_THRU_GROUP_LEN];
    out.extend_from_slice(&BT_SIG_COMPANY_ID.to_be_bytes()[1..]);
    out.extend_from_slice(&group_id.to_be_bytes());
    out
}

/// Observer that records a short description of every event.
#[doc(hidden)]
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<String>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }

    fn push(&self, event: String) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

impl DecodeObserver for RecordingObserver {
    fn on_dispatch(&self, opcode: Opcode, _ctype: ResponseType) {
        self.push(format!("dispatch {:#04x}", opcode.as_u8()));
    }

    fn on_vendor_header(&self, _ctype: ResponseType, header: &VendorHeader) {
        self.push(format!("header pdu={:#04x}", header.pdu));
    }

    fn on_attribute_count(&self, num_attr: u8) {
        self.push(format!("count {}", num_attr));
    }

    fn on_attribute(&self, index: usize, _entry: &AttributeEntry) {
        self.push(format!("attribute {}", index));
    }

    fn on_invalid_attribute(&self, index: usize, id: u32) {
        self.push(format!("invalid {} {:#04x}", index, id));
    }

    fn on_error(&self, _opcode: Opcode, err: &Error) {
        self.push(format!("error {}", err));
    }
}
