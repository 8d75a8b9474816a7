//! Structured encoding of values as JSON text
//!
//! This is the first stage of the encode pipeline. Containers nested deeper
//! than the configured depth are flattened to their display string, date
//! values become `\/Date(<ms>)\/` tokens, and every `/` inside a string is
//! written as `\/` (valid JSON, and the form the date rewriter looks for).

use crate::core::Value;
use crate::error::Result;
use crate::io::writer::EncoderConfig;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use std::io;

/// Encode a value as indented JSON text
pub fn encode_json(value: &Value, config: &EncoderConfig) -> Result<String> {
    let mut buf = Vec::new();
    let formatter = EscapedSlashFormatter::new(config.indent);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    DepthLimited::root(value, config.depth).serialize(&mut serializer)?;

    // The serializer only ever writes valid UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// A value viewed at a given nesting level; the root is level 0
struct DepthLimited<'a> {
    value: &'a Value,
    level: usize,
    depth: usize,
}

impl<'a> DepthLimited<'a> {
    fn root(value: &'a Value, depth: usize) -> Self {
        Self {
            value,
            level: 0,
            depth,
        }
    }

    fn child(&self, value: &'a Value) -> Self {
        Self {
            value,
            level: self.level + 1,
            depth: self.depth,
        }
    }
}

impl Serialize for DepthLimited<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self.value {
            Value::DateTime(dt) => {
                serializer.serialize_str(&format!("/Date({})/", dt.timestamp_millis()))
            }
            container if container.is_container() && self.level > self.depth => {
                serializer.serialize_str(&container.to_string())
            }
            Value::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(&self.child(item))?;
                }
                seq.end()
            }
            Value::Map(map) => {
                let mut m = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    m.serialize_entry(k, &self.child(v))?;
                }
                m.end()
            }
            scalar => scalar.serialize(serializer),
        }
    }
}

/// Indented JSON output that escapes forward slashes
struct EscapedSlashFormatter {
    indent: Vec<u8>,
    current_indent: usize,
    has_value: bool,
}

impl EscapedSlashFormatter {
    fn new(indent: usize) -> Self {
        Self {
            indent: vec![b' '; indent],
            current_indent: 0,
            has_value: false,
        }
    }

    fn write_indent<W>(&self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        for _ in 0..self.current_indent {
            writer.write_all(&self.indent)?;
        }
        Ok(())
    }

    fn begin_container<W>(&mut self, writer: &mut W, open: &[u8]) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.current_indent += 1;
        self.has_value = false;
        writer.write_all(open)
    }

    fn end_container<W>(&mut self, writer: &mut W, close: &[u8]) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.current_indent -= 1;
        if self.has_value {
            writer.write_all(b"\n")?;
            self.write_indent(writer)?;
        }
        writer.write_all(close)
    }

    fn begin_entry<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(if first { b"\n" } else { b",\n" })?;
        self.write_indent(writer)
    }
}

impl serde_json::ser::Formatter for EscapedSlashFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut parts = fragment.split('/');
        if let Some(first) = parts.next() {
            writer.write_all(first.as_bytes())?;
        }
        for part in parts {
            writer.write_all(b"\\/")?;
            writer.write_all(part.as_bytes())?;
        }
        Ok(())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.begin_container(writer, b"[")
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.end_container(writer, b"]")
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.begin_entry(writer, first)
    }

    fn end_array_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.begin_container(writer, b"{")
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.end_container(writer, b"}")
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.begin_entry(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn end_object_value<W>(&mut self, _writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        self.has_value = true;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::PropertyBag;
    use chrono::{DateTime, Utc};
    use pretty_assertions::assert_eq;

    fn config(depth: usize) -> EncoderConfig {
        EncoderConfig {
            depth,
            indent: 2,
        }
    }

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Map(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect::<PropertyBag>(),
        )
    }

    #[test]
    fn test_indented_output() {
        let value = map(vec![
            ("a", Value::Int32(1)),
            ("b", Value::Sequence(vec![Value::Bool(true), Value::string("x")])),
        ]);

        let json = encode_json(&value, &config(2)).unwrap();
        assert_eq!(
            json,
            "{\n  \"a\": 1,\n  \"b\": [\n    true,\n    \"x\"\n  ]\n}"
        );
    }

    #[test]
    fn test_empty_containers() {
        let value = map(vec![("e", Value::Sequence(vec![])), ("m", Value::empty_map())]);
        let json = encode_json(&value, &config(2)).unwrap();
        assert_eq!(json, "{\n  \"e\": [],\n  \"m\": {}\n}");
    }

    #[test]
    fn test_slashes_are_escaped() {
        let json = encode_json(&Value::string("a/b"), &config(2)).unwrap();
        assert_eq!(json, r#""a\/b""#);
    }

    #[test]
    fn test_dates_become_tokens() {
        let dt = DateTime::<Utc>::from_timestamp_millis(1500).unwrap();
        let json = encode_json(&Value::DateTime(dt), &config(2)).unwrap();
        assert_eq!(json, r#""\/Date(1500)\/""#);
    }

    #[test]
    fn test_depth_limit_flattens_deep_containers() {
        let value = map(vec![(
            "l1",
            map(vec![("l2", map(vec![("l3", Value::Int32(3))]))]),
        )]);

        let json = encode_json(&value, &config(1)).unwrap();
        assert_eq!(
            json,
            "{\n  \"l1\": {\n    \"l2\": \"@{l3=3}\"\n  }\n}"
        );
    }

    #[test]
    fn test_depth_zero_keeps_only_root() {
        let value = Value::Sequence(vec![
            Value::Int32(1),
            Value::Sequence(vec![Value::Int32(2), Value::Int32(3)]),
        ]);

        let json = encode_json(&value, &config(0)).unwrap();
        assert_eq!(json, "[\n  1,\n  \"2 3\"\n]");
    }
}
