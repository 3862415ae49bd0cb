// libavrc/src/error.rs

use thiserror::Error;

use crate::types::Status;

/// 共通エラー型
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    #[error("truncated input: expected {expected} bytes, got {actual}")]
    TruncatedInput { expected: usize, actual: usize },

    #[error("internal error: {0}")]
    InternalError(String),

    #[error("bad command: unsupported id {0:#04x}")]
    BadCommand(u8),

    #[error("unknown opcode: {0:#04x}")]
    UnknownOpcode(u8),

    /// Vendor-dependent frame from a company other than the Bluetooth SIG.
    #[error("unsupported company id: {0:#08x}")]
    UnsupportedCompany(u32),

    /// The peer answered with a REJECTED ctype; the status byte is carried
    /// verbatim.
    #[error("response rejected: status={0}")]
    Rejected(Status),

    #[error("invalid media attribute id at index {index}: {id:#010x}")]
    InvalidAttribute { index: usize, id: u32 },

    #[error("invalid response type: {0:#04x}")]
    InvalidResponseType(u8),

    #[error("frame format error: {0}")]
    FrameFormat(String),
}

impl Error {
    /// AVRCP status code reported for this error in a result record.
    pub fn status(&self) -> Status {
        match self {
            Error::BadCommand(_) | Error::UnsupportedCompany(_) => Status::BAD_COMMAND,
            Error::TruncatedInput { .. }
            | Error::InvalidAttribute { .. }
            | Error::InvalidResponseType(_)
            | Error::FrameFormat(_) => Status::BAD_PARAMETER,
            Error::InternalError(_) | Error::UnknownOpcode(_) => Status::INTERNAL_ERROR,
            Error::Rejected(status) => *status,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
