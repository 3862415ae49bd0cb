// fixtures.rs — provides commonly used response payloads/frames

use libavrc::ResponseType;
use libavrc::test_support::{attribute_entry_bytes, pass_through_group_body, vendor_frame, vendor_payload};

fn bytes(trace: &str) -> Vec<u8> {
    hex::decode(trace.replace(' ', "")).expect("fixture hex")
}

/// Get Element Attributes: one Title entry "ABC". The declared length is
/// the short value seen in the field trace, not the body length.
pub fn element_attrs_title_abc() -> Vec<u8> {
    bytes("20 00 00 05 01 00 00 00 01 00 00 00 03 41 42 43")
}

/// Set Absolute Volume accepted at 0x45.
pub fn set_volume_45() -> Vec<u8> {
    bytes("50 00 00 01 45")
}

/// Rejected Get Element Attributes carrying status 0x02.
pub fn rejected_element_attrs() -> Vec<u8> {
    bytes("20 00 00 01 02")
}

/// Volume changed notification (interim) at `volume`.
pub fn volume_notification(volume: u8) -> Vec<u8> {
    vendor_payload(0x31, &[0x0D, volume])
}

/// Now-playing metadata: title, artist, album, playing time.
pub fn now_playing() -> Vec<u8> {
    let mut body = vec![4u8];
    body.extend(attribute_entry_bytes(1, 0x006A, "Blue in Green".as_bytes()));
    body.extend(attribute_entry_bytes(2, 0x006A, "Miles Davis".as_bytes()));
    body.extend(attribute_entry_bytes(3, 0x006A, "Kind of Blue".as_bytes()));
    body.extend(attribute_entry_bytes(7, 0x006A, b"337000"));
    vendor_payload(0x20, &body)
}

/// Attribute list with an out-of-range id in the middle.
pub fn attrs_with_invalid_id() -> Vec<u8> {
    let mut body = vec![3u8];
    body.extend(attribute_entry_bytes(1, 0x006A, b"One"));
    body.extend(attribute_entry_bytes(0x0000_0100, 0x006A, b"vendor"));
    body.extend(attribute_entry_bytes(6, 0x006A, b"Rock"));
    vendor_payload(0x20, &body)
}

pub fn next_group_body() -> Vec<u8> {
    pass_through_group_body(0, false)
}

pub fn now_playing_frame() -> Vec<u8> {
    vendor_frame(ResponseType::Stable, &now_playing())
}
