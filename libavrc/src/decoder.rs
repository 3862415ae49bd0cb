// libavrc/src/decoder.rs

use std::fmt;

use crate::config::{DecoderConfig, InvalidAttributePolicy};
use crate::observer::{DecodeObserver, LogObserver};
use crate::protocol::frame::Message;
use crate::protocol::responses::{self, Response};

/// Stateless response decoder: a configuration plus the observer that
/// receives decode events. A `Decoder` can be shared between threads; each
/// call owns its cursor and output.
pub struct Decoder {
    config: DecoderConfig,
    observer: Box<dyn DecodeObserver>,
}

impl Decoder {
    pub fn new(config: DecoderConfig) -> Self {
        Self {
            config,
            observer: Box::new(LogObserver),
        }
    }

    pub fn builder() -> DecoderBuilder {
        DecoderBuilder::new()
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    pub fn observer(&self) -> &dyn DecodeObserver {
        self.observer.as_ref()
    }

    /// Parse one response message. Never fails: the outcome is stamped into
    /// `Response::status` and `Response::error`.
    pub fn parse_response(&self, msg: &Message<'_>) -> Response {
        responses::parse_with(self, msg)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new(DecoderConfig::default())
    }
}

impl fmt::Debug for Decoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Decoder")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Helper to construct a Decoder with optional configuration.
pub struct DecoderBuilder {
    config: DecoderConfig,
    observer: Option<Box<dyn DecodeObserver>>,
}

impl DecoderBuilder {
    pub fn new() -> Self {
        Self {
            config: DecoderConfig::default(),
            observer: None,
        }
    }

    pub fn config(mut self, config: DecoderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn invalid_attribute_policy(mut self, policy: InvalidAttributePolicy) -> Self {
        self.config.invalid_attribute = policy;
        self
    }

    /// Replace the default `LogObserver`.
    pub fn observer(mut self, observer: Box<dyn DecodeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn build(self) -> Decoder {
        Decoder {
            config: self.config,
            observer: self.observer.unwrap_or_else(|| Box::new(LogObserver)),
        }
    }
}

impl Default for DecoderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
