#[path = "../common/mod.rs"]
mod common;

use libavrc::prelude::*;
use libavrc::protocol::decode_response_frame;
use libavrc::test_support::vendor_frame;

#[test]
fn now_playing_frame_decodes() {
    common::init_logging();
    let frame = common::fixtures::now_playing_frame();
    let msg = Frame::decode(&frame).unwrap();
    assert_eq!(msg.ctype, ResponseType::Stable);
    assert_eq!(msg.company_id, Some(libavrc::constants::BT_SIG_COMPANY_ID));

    let resp = decode_response_frame(&frame).unwrap();
    assert_eq!(resp.element_attributes().unwrap().valid_entries().count(), 4);
}

#[test]
fn rejected_volume_frame() {
    let frame = vendor_frame(ResponseType::Rejected, &[0x50, 0x00, 0x00, 0x01, 0x03]);
    let resp = decode_response_frame(&frame).unwrap();
    assert_eq!(resp.status, Status::INTERNAL_ERROR);
    assert_eq!(resp.pdu, Some(0x50));
}

#[test]
fn command_frame_is_refused() {
    // CONTROL ctype (0x00) is a command, not a response
    let mut frame = common::fixtures::now_playing_frame();
    frame[0] = 0x00;
    assert_eq!(
        decode_response_frame(&frame).unwrap_err(),
        Error::InvalidResponseType(0x00)
    );
}

#[test]
fn pass_through_frame_round_trips_through_parser() -> anyhow::Result<()> {
    let mut frame = vec![ResponseType::Accepted.as_u8(), 0x48, 0x7C];
    frame.extend(common::fixtures::next_group_body());
    let resp = decode_response_frame(&frame)?;
    let payload = resp.into_result()?;
    assert_eq!(payload, Payload::PassThrough(PassThroughGroup::NextGroup));
    Ok(())
}

#[test]
fn foreign_company_frame_is_bad_command() {
    // same vendor body, but the company id is not the Bluetooth SIG one
    let mut frame = vec![ResponseType::Accepted.as_u8(), 0x48, 0x00, 0x00, 0x1A, 0x2B];
    frame.extend(common::fixtures::set_volume_45());
    let resp = decode_response_frame(&frame).unwrap();
    assert_eq!(resp.status, Status::BAD_COMMAND);
    assert_eq!(resp.error, Some(Error::UnsupportedCompany(0x00_1A_2B)));
    assert!(resp.volume().is_none());
}
