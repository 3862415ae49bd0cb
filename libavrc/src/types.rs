// libavrc/src/types.rs

use crate::Error;
use derive_more::Display;
use std::convert::TryFrom;

/// AVRCP status code (u8)
///
/// Only the codes the decoder produces itself have names; any other value
/// seen in a reject payload is carried verbatim.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[display(fmt = "{:#04x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Status(u8);

impl Status {
    pub const BAD_COMMAND: Self = Self(0x00);
    pub const BAD_PARAMETER: Self = Self(0x01);
    pub const NOT_FOUND: Self = Self(0x02);
    pub const INTERNAL_ERROR: Self = Self(0x03);
    pub const NO_ERROR: Self = Self(0x04);

    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    pub fn is_ok(&self) -> bool {
        *self == Self::NO_ERROR
    }
}

/// Response ctype of an AV/C frame
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResponseType {
    NotImplemented = 0x08,
    Accepted = 0x09,
    Rejected = 0x0A,
    InTransition = 0x0B,
    /// IMPLEMENTED / STABLE, the normal completion of a status inquiry
    Stable = 0x0C,
    Changed = 0x0D,
    Interim = 0x0F,
}

impl ResponseType {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for ResponseType {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x08 => Ok(Self::NotImplemented),
            0x09 => Ok(Self::Accepted),
            0x0A => Ok(Self::Rejected),
            0x0B => Ok(Self::InTransition),
            0x0C => Ok(Self::Stable),
            0x0D => Ok(Self::Changed),
            0x0F => Ok(Self::Interim),
            other => Err(Error::InvalidResponseType(other)),
        }
    }
}

/// AV/C operation code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Opcode {
    Vendor,
    PassThrough,
    Unknown(u8),
}

impl Opcode {
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Vendor => crate::constants::AVC_OP_VENDOR,
            Self::PassThrough => crate::constants::AVC_OP_PASS_THRU,
            Self::Unknown(op) => *op,
        }
    }
}

impl From<u8> for Opcode {
    fn from(op: u8) -> Self {
        match op {
            crate::constants::AVC_OP_VENDOR => Self::Vendor,
            crate::constants::AVC_OP_PASS_THRU => Self::PassThrough,
            other => Self::Unknown(other),
        }
    }
}

/// Vendor-dependent PDU identifiers understood by the decoder.
///
/// Dispatch matches on this enum, so a new PDU has to be handled wherever
/// it is matched before the crate compiles again.
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PduId {
    GetElementAttributes = 0x20,
    RegisterNotification = 0x31,
    SetAbsoluteVolume = 0x50,
}

impl PduId {
    pub fn as_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for PduId {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x20 => Ok(Self::GetElementAttributes),
            0x31 => Ok(Self::RegisterNotification),
            0x50 => Ok(Self::SetAbsoluteVolume),
            other => Err(Error::BadCommand(other)),
        }
    }
}

/// Media attribute id (u32 on the wire)
#[repr(u32)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeId {
    Title = 1,
    Artist = 2,
    Album = 3,
    TrackNumber = 4,
    TotalTracks = 5,
    Genre = 6,
    PlayingTime = 7,
}

impl AttributeId {
    pub fn as_u32(&self) -> u32 {
        *self as u32
    }

    pub fn from_u32(id: u32) -> Option<Self> {
        match id {
            1 => Some(Self::Title),
            2 => Some(Self::Artist),
            3 => Some(Self::Album),
            4 => Some(Self::TrackNumber),
            5 => Some(Self::TotalTracks),
            6 => Some(Self::Genre),
            7 => Some(Self::PlayingTime),
            _ => None,
        }
    }
}

/// Notification event id
#[repr(u8)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventId {
    PlaybackStatusChanged = 0x01,
    TrackChanged = 0x02,
    TrackReachedEnd = 0x03,
    TrackReachedStart = 0x04,
    PlaybackPosChanged = 0x05,
    BatteryStatusChanged = 0x06,
    SystemStatusChanged = 0x07,
    PlayerApplicationSettingChanged = 0x08,
    NowPlayingContentChanged = 0x09,
    AvailablePlayersChanged = 0x0A,
    AddressedPlayerChanged = 0x0B,
    UidsChanged = 0x0C,
    VolumeChanged = 0x0D,
}

impl EventId {
    pub fn from_u8(id: u8) -> Option<Self> {
        match id {
            0x01 => Some(Self::PlaybackStatusChanged),
            0x02 => Some(Self::TrackChanged),
            0x03 => Some(Self::TrackReachedEnd),
            0x04 => Some(Self::TrackReachedStart),
            0x05 => Some(Self::PlaybackPosChanged),
            0x06 => Some(Self::BatteryStatusChanged),
            0x07 => Some(Self::SystemStatusChanged),
            0x08 => Some(Self::PlayerApplicationSettingChanged),
            0x09 => Some(Self::NowPlayingContentChanged),
            0x0A => Some(Self::AvailablePlayersChanged),
            0x0B => Some(Self::AddressedPlayerChanged),
            0x0C => Some(Self::UidsChanged),
            0x0D => Some(Self::VolumeChanged),
            _ => None,
        }
    }
}

/// Absolute volume - Newtype Pattern (7 ビット)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Volume(u8);

impl Volume {
    pub const MAX: Self = Self(crate::constants::MAX_VOLUME);

    /// Build from the raw wire byte, dropping the reserved top bit.
    pub fn from_raw(raw: u8) -> Self {
        Self(raw & crate::constants::MAX_VOLUME)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Volume scaled to 0..=100.
    pub fn percent(&self) -> u8 {
        ((self.0 as u16 * 100) / crate::constants::MAX_VOLUME as u16) as u8
    }
}

/// Group navigation carried by a vendor-unique pass-through
#[repr(u16)]
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PassThroughGroup {
    NextGroup = 0x0000,
    PreviousGroup = 0x0001,
}

impl PassThroughGroup {
    pub fn from_u16(id: u16) -> Option<Self> {
        match id {
            0x0000 => Some(Self::NextGroup),
            0x0001 => Some(Self::PreviousGroup),
            _ => None,
        }
    }

    pub fn as_u16(&self) -> u16 {
        *self as u16
    }
}
