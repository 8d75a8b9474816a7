//! Text-facing stages of the decode and encode pipelines
//!
//! - reader: YAML text to node trees and decoded values
//! - json: structured JSON encoding with a depth limit
//! - dates: date token rewriting
//! - framer: YAML document framing
//! - writer: the composed encode pipeline

pub mod dates;
pub mod framer;
pub mod json;
pub mod reader;
pub mod writer;

pub use dates::{format_timestamp, rewrite_date_tokens};
pub use framer::frame_document;
pub use json::encode_json;
pub use reader::YamlReader;
pub use writer::{EncoderConfig, YamlWriter};
