// libavrc/src/protocol/responses/element_attrs.rs

use crate::config::InvalidAttributePolicy;
use crate::decoder::Decoder;
use crate::protocol::parser::Cursor;
use crate::types::AttributeId;
use crate::{Error, Result};

/// One decoded (id, charset, text) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeEntry {
    pub id: AttributeId,
    pub charset_id: u16,
    pub text: Vec<u8>,
}

impl AttributeEntry {
    /// Text as `&str` when the entry is UTF-8 encoded and well-formed.
    pub fn as_utf8(&self) -> Option<&str> {
        if self.charset_id != crate::constants::CHARSET_UTF8 {
            return None;
        }
        std::str::from_utf8(&self.text).ok()
    }

    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.text).into_owned()
    }
}

/// A slot of the attribute list. Entries whose id is outside the media
/// attribute range are kept as `Invalid` so slot indexes match the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttributeSlot {
    Valid(AttributeEntry),
    Invalid { raw_id: u32 },
}

impl AttributeSlot {
    pub fn entry(&self) -> Option<&AttributeEntry> {
        match self {
            AttributeSlot::Valid(e) => Some(e),
            AttributeSlot::Invalid { .. } => None,
        }
    }
}

/// Get Element Attributes response body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementAttributesResult {
    pub num_attr: u8,
    pub entries: Vec<AttributeSlot>,
}

impl ElementAttributesResult {
    pub fn valid_entries(&self) -> impl Iterator<Item = &AttributeEntry> {
        self.entries.iter().filter_map(AttributeSlot::entry)
    }

    /// First valid entry carrying `id`.
    pub fn get(&self, id: AttributeId) -> Option<&AttributeEntry> {
        self.valid_entries().find(|e| e.id == id)
    }
}

/// Decode `num_attr` attribute entries starting at the cursor position.
/// Layout per entry: attr_id(4) + charset_id(2) + str_len(2) + text(str_len)
///
/// The list is all-or-nothing: a truncated entry fails the whole decode and
/// the entries decoded so far are dropped.
pub fn decode_element_attributes(
    cursor: &mut Cursor<'_>,
    num_attr: u8,
    decoder: &Decoder,
) -> Result<ElementAttributesResult> {
    let observer = decoder.observer();
    observer.on_attribute_count(num_attr);

    if num_attr == 0 {
        return Ok(ElementAttributesResult::default());
    }

    // Each entry needs at least its fixed header; fail before allocating.
    cursor.require(num_attr as usize * crate::constants::ATTR_ENTRY_HEADER_LEN)?;

    let mut entries = Vec::with_capacity(num_attr as usize);
    for index in 0..num_attr as usize {
        let raw_id = cursor.read_u32_be()?;
        let charset_id = cursor.read_u16_be()?;
        let str_len = cursor.read_u16_be()? as usize;
        // consumed even for invalid ids: the wire format has no skip marker
        let text = cursor.read_bytes(str_len)?;

        match AttributeId::from_u32(raw_id) {
            Some(id) => {
                let entry = AttributeEntry {
                    id,
                    charset_id,
                    text: text.to_vec(),
                };
                observer.on_attribute(index, &entry);
                entries.push(AttributeSlot::Valid(entry));
            }
            None => {
                observer.on_invalid_attribute(index, raw_id);
                match decoder.config().invalid_attribute {
                    InvalidAttributePolicy::Skip => entries.push(AttributeSlot::Invalid { raw_id }),
                    InvalidAttributePolicy::Reject => {
                        return Err(Error::InvalidAttribute { index, id: raw_id });
                    }
                }
            }
        }
    }

    Ok(ElementAttributesResult { num_attr, entries })
}
