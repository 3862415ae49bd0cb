// libavrc/src/protocol/mod.rs

pub mod codec;
pub mod frame;
pub mod parser;
pub mod responses;

pub use codec::{decode_response_frame, decode_response_frame_with};
pub use frame::{Frame, Message};
pub use parser::Cursor;
pub use responses::*;
