// libavrc/src/constants.rs
//! Common protocol constants used across the crate

/// AV/C opcode for vendor-dependent commands
pub const AVC_OP_VENDOR: u8 = 0x00;

/// AV/C opcode for panel subunit pass-through commands
pub const AVC_OP_PASS_THRU: u8 = 0x7C;

/// Bluetooth SIG company id carried by AVRCP metadata messages
pub const BT_SIG_COMPANY_ID: u32 = 0x001958;

/// AV/C header length: ctype(1) + subunit(1) + opcode(1)
pub const AVC_HEADER_LEN: usize = 3;

/// Company id length in vendor-dependent frames
pub const COMPANY_ID_LEN: usize = 3;

/// Vendor envelope length: pdu(1) + packet_type(1) + length(2)
pub const VENDOR_HEADER_LEN: usize = 4;

/// Pass-through operation id for vendor-unique operations
pub const PASS_THRU_OP_VENDOR: u8 = 0x7E;

/// Pass-through state flag (bit 7 set = released)
pub const PASS_THRU_STATE_MASK: u8 = 0x80;

/// Operand length of a group navigation pass-through: company id(3) + id(2)
pub const PASS_THRU_GROUP_LEN: u8 = 5;

/// Fixed part of an element attribute entry: id(4) + charset(2) + len(2)
pub const ATTR_ENTRY_HEADER_LEN: usize = 8;

/// Charset id for UTF-8 text (IANA MIBenum 106)
pub const CHARSET_UTF8: u16 = 0x006A;

/// Absolute volume is 7 bits, bit 7 is reserved
pub const MAX_VOLUME: u8 = 0x7F;
