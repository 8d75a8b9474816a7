//! yamlcast: decode YAML into dynamically typed values and encode them back
//!
//! Decoding walks the parsed YAML tree and infers a type for every plain
//! scalar (`i32`, `i64`, `f32`, `f64`, `bool`, then string). Quoted and block
//! scalars stay strings. Top-level maps can be seeded with default
//! properties that the document then overrides.
//!
//! Encoding goes through JSON: values are encoded with a depth limit, date
//! tokens are rewritten to ISO-8601, and the result is framed as a YAML
//! document.
//!
//! # Quick Start
//!
//! ## Decoding
//!
//! ```rust
//! use yamlcast::{decode, PropertyBag, Result, Value};
//!
//! fn main() -> Result<()> {
//!     let mut defaults = PropertyBag::new();
//!     defaults.insert("retries".to_string(), Value::Int32(3));
//!
//!     let docs = decode("name: web\nport: 8080\nratio: 0.5\n", Some(&defaults))?;
//!     assert_eq!(docs[0].get("port"), Some(&Value::Int32(8080)));
//!     assert_eq!(docs[0].get("retries"), Some(&Value::Int32(3)));
//!     Ok(())
//! }
//! ```
//!
//! ## Encoding
//!
//! ```rust
//! use yamlcast::{encode, Result, Value};
//!
//! fn main() -> Result<()> {
//!     let yaml = encode(&[Value::string("hello")], None)?;
//!     assert_eq!(yaml, "---\r\n\"hello\"\r\n...");
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: node tree, value model, scalar coercion and recursive decoding
//! - [`io`]: YAML parsing and the encode pipeline stages
//! - [`error`]: error type shared by both directions

// Public API exports
pub use crate::error::{ErrorSeverity, Result, YamlCastError};

// Core types
pub use crate::core::{
    coerce_scalar, decode_documents, decode_node, Node, NodeKind, PropertyBag, ScalarStyle, Value,
};

// IO types
pub use crate::io::{EncoderConfig, YamlReader, YamlWriter};

pub mod core;
pub mod error;
pub mod io;

// CLI components are available only in the binary, not as part of the library API

/// Decode every document of a YAML stream, in stream order.
///
/// `defaults` seeds the root map of each document; it has no effect on
/// documents whose root is a sequence or scalar.
pub fn decode(yaml: &str, defaults: Option<&PropertyBag>) -> Result<Vec<Value>> {
    YamlReader::new().read_str(yaml, defaults)
}

/// Encode values into one framed YAML document.
///
/// `depth` defaults to 2 when `None`.
pub fn encode(values: &[Value], depth: Option<usize>) -> Result<String> {
    let config = depth.map(EncoderConfig::with_depth).unwrap_or_default();
    YamlWriter::with_config(config).encode(values)
}
