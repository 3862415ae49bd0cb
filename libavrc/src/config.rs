// libavrc/src/config.rs
//! Decoder configuration

/// What to do with an element attribute whose id is outside the known
/// media attribute range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InvalidAttributePolicy {
    /// Consume the entry and record it as `AttributeSlot::Invalid`.
    #[default]
    Skip,
    /// Fail the whole attribute list with `Error::InvalidAttribute`.
    Reject,
}

/// Tunables applied by a `Decoder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderConfig {
    pub invalid_attribute: InvalidAttributePolicy,
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_invalid_attribute(mut self, policy: InvalidAttributePolicy) -> Self {
        self.invalid_attribute = policy;
        self
    }
}
