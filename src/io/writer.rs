//! Values to framed YAML text
//!
//! Encoding runs three stages in order: structured JSON encoding with a depth
//! limit, date token rewriting, then document framing. Each stage is a plain
//! text-to-text function and can be used on its own.

use crate::core::Value;
use crate::error::{Result, YamlCastError};
use crate::io::dates::rewrite_date_tokens;
use crate::io::framer::frame_document;
use crate::io::json::encode_json;
use log::debug;

/// Configuration for the YAML writer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderConfig {
    /// Nesting levels expanded below the root before containers are
    /// flattened to strings
    pub depth: usize,
    /// Spaces per indentation level
    pub indent: usize,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            indent: 4,
        }
    }
}

impl EncoderConfig {
    /// Default configuration with a different depth
    pub fn with_depth(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }
}

/// YAML writer
#[derive(Debug, Clone, Default)]
pub struct YamlWriter {
    config: EncoderConfig,
}

impl YamlWriter {
    /// Create a new writer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new writer with custom configuration
    pub fn with_config(config: EncoderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode all input values into one framed YAML document.
    ///
    /// A single value is encoded as itself; several are encoded together
    /// as one sequence. An empty input is rejected before any work is done.
    pub fn encode(&self, values: &[Value]) -> Result<String> {
        match values {
            [] => Err(YamlCastError::invalid_argument(
                "encode requires at least one input value",
            )),
            [single] => self.encode_value(single),
            many => self.encode_value(&Value::Sequence(many.to_vec())),
        }
    }

    /// Encode one value into a framed YAML document
    pub fn encode_value(&self, value: &Value) -> Result<String> {
        let json = encode_json(value, &self.config)?;
        debug!(
            "Encoded {} at depth {} into {} bytes",
            value.type_name(),
            self.config.depth,
            json.len()
        );

        let rewritten = rewrite_date_tokens(&json);
        Ok(frame_document(&rewritten))
    }
}
