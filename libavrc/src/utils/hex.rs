//! Hexadecimal helpers for log output.
//!
//! Attribute text is traced the way AVRCP sniffers print it (`"41 42 43"`).

use std::fmt::Write;

/// Convert a byte slice to a lowercase hex string with a single space between
/// each byte, as used in trace output.
///
/// Example: `&[0x41, 0x42]` -> `"41 42"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for b in bytes {
        if !s.is_empty() {
            s.push(' ');
        }
        let _ = write!(s, "{:02x}", b);
    }
    s
}
