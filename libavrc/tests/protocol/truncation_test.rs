#[path = "../common/mod.rs"]
mod common;

use libavrc::prelude::*;
use libavrc::test_support::{attribute_entry_bytes, vendor_payload};
use proptest::prelude::*;

fn assert_truncated_at_every_offset(ctype: ResponseType, opcode: Opcode, full: &[u8]) {
    for cut in 0..full.len() {
        // copy into an exact-size buffer so any over-read would hit the end
        let prefix = full[..cut].to_vec();
        let resp = parse_response(&Message::new(ctype, opcode, &prefix));
        match resp.error {
            Some(Error::TruncatedInput { .. }) => {}
            other => panic!("cut at {} of {}: expected TruncatedInput, got {:?}", cut, full.len(), other),
        }
        assert_eq!(resp.status, Status::BAD_PARAMETER);
        assert!(resp.payload.is_none());
    }
    let resp = parse_response(&Message::new(ctype, opcode, full));
    assert!(resp.is_ok(), "full message failed: {:?}", resp.error);
}

#[test]
fn element_attributes_truncated_everywhere() {
    assert_truncated_at_every_offset(
        ResponseType::Stable,
        Opcode::Vendor,
        &common::fixtures::element_attrs_title_abc(),
    );
    assert_truncated_at_every_offset(
        ResponseType::Stable,
        Opcode::Vendor,
        &common::fixtures::now_playing(),
    );
}

#[test]
fn volume_and_notification_truncated_everywhere() {
    assert_truncated_at_every_offset(
        ResponseType::Accepted,
        Opcode::Vendor,
        &common::fixtures::set_volume_45(),
    );
    assert_truncated_at_every_offset(
        ResponseType::Interim,
        Opcode::Vendor,
        &common::fixtures::volume_notification(0x10),
    );
}

#[test]
fn pass_through_truncated_everywhere() {
    assert_truncated_at_every_offset(
        ResponseType::Accepted,
        Opcode::PassThrough,
        &common::fixtures::next_group_body(),
    );
}

#[test]
fn forged_string_length_does_not_over_read() {
    // entry claims 0xFFFF bytes of text, buffer holds 3
    let mut body = vec![1u8];
    body.extend_from_slice(&[0, 0, 0, 1, 0, 0x6A, 0xFF, 0xFF, b'A', b'B', b'C']);
    let mut data = vec![0x20, 0x00, 0x00, body.len() as u8];
    data.extend_from_slice(&body);
    let resp = parse_response(&Message::vendor(ResponseType::Stable, &data));
    match resp.error {
        Some(Error::TruncatedInput {
            expected: 0xFFFF,
            actual: 3,
        }) => {}
        other => panic!("expected TruncatedInput, got {:?}", other),
    }
}

#[test]
fn forged_declared_length_is_truncation() {
    let resp = parse_response(&Message::vendor(
        ResponseType::Stable,
        &[0x20, 0x00, 0xFF, 0xFF, 0x00],
    ));
    assert_eq!(
        resp.error,
        Some(Error::TruncatedInput {
            expected: 0xFFFF,
            actual: 1
        })
    );
    // the envelope itself is rejected, so no pdu is recorded
    assert_eq!(resp.pdu, None);
}

proptest! {
    #[test]
    fn attribute_lists_truncated_at_random_offset(
        texts in prop::collection::vec(prop::collection::vec(any::<u8>(), 0..16), 1..8),
        cut_ratio in 0.0f64..1.0,
    ) {
        let mut body = vec![texts.len() as u8];
        for (i, t) in texts.iter().enumerate() {
            body.extend(attribute_entry_bytes((i % 7) as u32 + 1, 0x006A, t));
        }
        let full = vendor_payload(0x20, &body);

        let resp = parse_response(&Message::vendor(ResponseType::Stable, &full));
        let attrs = resp.element_attributes().unwrap();
        prop_assert_eq!(attrs.entries.len(), texts.len());
        for (slot, t) in attrs.entries.iter().zip(&texts) {
            prop_assert_eq!(&slot.entry().unwrap().text, t);
        }

        let cut = ((full.len() as f64) * cut_ratio) as usize;
        let prefix = full[..cut.min(full.len() - 1)].to_vec();
        let resp = parse_response(&Message::vendor(ResponseType::Stable, &prefix));
        let truncated = matches!(resp.error, Some(Error::TruncatedInput { .. }));
        prop_assert!(truncated);
    }
}
