//! Scalar type inference
//!
//! Plain scalars are tried against progressively wider types and the first
//! parse that succeeds wins:
//!
//! 1. `i32`
//! 2. `i64`
//! 3. `f32`
//! 4. `f64`
//! 5. `bool` (`true`/`false`, any case)
//! 6. the original text
//!
//! Narrow numeric types come first so `7` stays an integer, and booleans come
//! last so `1`/`0` are numbers. Quoted and block scalars are never inferred.

use super::node::ScalarStyle;
use super::value::Value;

/// Convert one scalar's text into the most specific value it parses as.
///
/// Never fails: text that matches nothing comes back as [`Value::String`].
pub fn coerce_scalar(text: &str, style: ScalarStyle) -> Value {
    if !style.is_plain() {
        return Value::string(text);
    }

    if let Ok(i) = text.parse::<i32>() {
        Value::Int32(i)
    } else if let Ok(i) = text.parse::<i64>() {
        Value::Int64(i)
    } else if let Ok(f) = text.parse::<f32>() {
        Value::Float32(f)
    } else if let Ok(f) = text.parse::<f64>() {
        Value::Float64(f)
    } else if let Some(b) = parse_bool(text) {
        Value::Bool(b)
    } else {
        Value::string(text)
    }
}

fn parse_bool(text: &str) -> Option<bool> {
    if text.eq_ignore_ascii_case("true") {
        Some(true)
    } else if text.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}
