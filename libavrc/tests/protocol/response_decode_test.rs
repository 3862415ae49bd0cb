#[path = "../common/mod.rs"]
mod common;

use libavrc::prelude::*;

#[test]
fn element_attributes_trace_decodes_title() {
    common::init_logging();
    let data = common::fixtures::element_attrs_title_abc();
    let resp = parse_response(&Message::vendor(ResponseType::Stable, &data));

    assert_eq!(resp.status, Status::NO_ERROR);
    assert_eq!(resp.pdu, Some(PduId::GetElementAttributes.as_u8()));
    let attrs = resp.element_attributes().unwrap();
    assert_eq!(attrs.entries.len(), 1);
    let title = attrs.entries[0].entry().unwrap();
    assert_eq!(title.id, AttributeId::Title);
    assert_eq!(title.charset_id, 0);
    assert_eq!(title.text, b"ABC");
}

#[test]
fn set_absolute_volume_trace() {
    let data = common::fixtures::set_volume_45();
    let resp = parse_response(&Message::vendor(ResponseType::Accepted, &data));
    assert!(resp.is_ok());
    assert_eq!(resp.volume().unwrap().volume.as_u8(), 0x45);
}

#[test]
fn rejected_trace_surfaces_status_byte() {
    let data = common::fixtures::rejected_element_attrs();
    let resp = parse_response(&Message::vendor(ResponseType::Rejected, &data));
    assert_eq!(resp.status, Status::new(0x02));
    assert_eq!(resp.error, Some(Error::Rejected(Status::new(0x02))));
    assert!(resp.payload.is_none());
}

#[test]
fn now_playing_entries_have_declared_lengths() {
    let data = common::fixtures::now_playing();
    let resp = parse_response(&Message::vendor(ResponseType::Stable, &data));
    let attrs = resp.element_attributes().unwrap();
    assert_eq!(attrs.num_attr, 4);
    assert_eq!(attrs.valid_entries().count(), 4);
    assert_eq!(
        attrs.get(AttributeId::Artist).unwrap().as_utf8(),
        Some("Miles Davis")
    );
    assert_eq!(
        attrs.get(AttributeId::PlayingTime).unwrap().text.len(),
        6
    );
}

#[test]
fn invalid_attribute_skip_and_reject_policies() {
    let data = common::fixtures::attrs_with_invalid_id();

    let resp = parse_response(&Message::vendor(ResponseType::Stable, &data));
    let attrs = resp.element_attributes().unwrap();
    assert_eq!(attrs.entries.len(), 3);
    assert_eq!(attrs.entries[1], AttributeSlot::Invalid { raw_id: 0x100 });
    assert_eq!(attrs.get(AttributeId::Genre).unwrap().text, b"Rock");

    let strict = Decoder::builder()
        .invalid_attribute_policy(InvalidAttributePolicy::Reject)
        .build();
    let resp = strict.parse_response(&Message::vendor(ResponseType::Stable, &data));
    assert_eq!(resp.status, Status::BAD_PARAMETER);
    assert_eq!(
        resp.error,
        Some(Error::InvalidAttribute {
            index: 1,
            id: 0x100
        })
    );
    assert!(resp.payload.is_none());
}

#[test]
fn volume_notification_interim_and_changed() {
    let data = common::fixtures::volume_notification(0x20);
    for ctype in [
        ResponseType::Interim,
        ResponseType::Changed,
        ResponseType::NotImplemented,
    ] {
        let resp = parse_response(&Message::vendor(ctype, &data));
        let n = resp.notification().unwrap();
        assert_eq!(n.event(), Some(EventId::VolumeChanged));
        assert_eq!(n.status, ctype);
        assert_eq!(n.param, NotificationParam::Volume(Volume::from_raw(0x20)));
    }
}

#[test]
fn unknown_pdu_is_bad_command() {
    let resp = parse_response(&Message::vendor(
        ResponseType::Stable,
        &[0x30, 0x00, 0x00, 0x01, 0x00],
    ));
    assert_eq!(resp.status, Status::BAD_COMMAND);
    assert_eq!(resp.error, Some(Error::BadCommand(0x30)));
    assert!(resp.element_attributes().is_none());
    assert!(resp.volume().is_none());
    assert!(resp.notification().is_none());
}

#[test]
fn pass_through_next_group() {
    let body = common::fixtures::next_group_body();
    let resp = parse_response(&Message::pass_through(ResponseType::Accepted, &body));
    assert_eq!(resp.opcode, Opcode::PassThrough);
    assert_eq!(resp.pdu, Some(0));
    assert_eq!(resp.payload, Some(Payload::PassThrough(PassThroughGroup::NextGroup)));
}

#[test]
fn unknown_opcode_leaves_record_empty() {
    let resp = parse_response(&Message::new(
        ResponseType::Stable,
        Opcode::Unknown(0x31),
        &[],
    ));
    assert_eq!(resp.opcode.as_u8(), 0x31);
    assert_eq!(resp.status, Status::INTERNAL_ERROR);
    assert_eq!(resp.pdu, None);
    assert_eq!(resp.payload, None);
}
