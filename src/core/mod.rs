//! Core types and decoding logic
//!
//! - Node: the parsed YAML tree the decoder walks
//! - Value: the dynamically shaped result of decoding
//! - coerce_scalar: type inference for a single scalar
//! - decode_node / decode_documents: recursive decoding with default merging

pub mod decoder;
pub mod node;
pub mod scalar;
pub mod value;

pub use decoder::{decode_documents, decode_node};
pub use node::{Node, NodeKind, ScalarStyle};
pub use scalar::coerce_scalar;
pub use value::{PropertyBag, Value};
