// libavrc/src/protocol/codec.rs

use crate::Result;
use crate::decoder::Decoder;

use super::Frame;
use super::responses::Response;

/// Decode a full AV/C response frame and parse the contained message with
/// the default decoder.
pub fn decode_response_frame(frame: &[u8]) -> Result<Response> {
    decode_response_frame_with(&Decoder::default(), frame)
}

/// Same as `decode_response_frame` with an explicit decoder.
pub fn decode_response_frame_with(decoder: &Decoder, frame: &[u8]) -> Result<Response> {
    let msg = Frame::decode(frame)?;
    Ok(decoder.parse_response(&msg))
}
