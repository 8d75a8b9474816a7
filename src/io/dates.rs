//! Rewriting of `\/Date(<ms>)\/` tokens into ISO-8601 timestamps
//!
//! The JSON stage writes date values as milliseconds since the Unix epoch.
//! This stage turns every such token into a UTC timestamp with seven
//! fractional digits, e.g. `1970-01-01T00:00:00.0000000Z`.

use chrono::{DateTime, Utc};
use log::warn;
use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::OnceLock;

static DATE_TOKEN: OnceLock<Regex> = OnceLock::new();

fn date_token_pattern() -> &'static Regex {
    DATE_TOKEN.get_or_init(|| {
        Regex::new(r"\\/Date\((\d+)\)\\/").expect("date token pattern is valid")
    })
}

/// Replace every date token in `text`, scanning left to right.
///
/// Text without tokens is returned borrowed and unchanged. A token whose
/// milliseconds cannot be represented is left as-is.
pub fn rewrite_date_tokens(text: &str) -> Cow<'_, str> {
    date_token_pattern().replace_all(text, |caps: &Captures| {
        let millis = &caps[1];
        match millis
            .parse::<i64>()
            .ok()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
        {
            Some(dt) => format_timestamp(&dt),
            None => {
                warn!("Leaving out-of-range date token with {} ms unchanged", millis);
                caps[0].to_string()
            }
        }
    })
}

/// Round-trip timestamp format with 100ns precision
pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    format!(
        "{}.{:07}Z",
        dt.format("%Y-%m-%dT%H:%M:%S"),
        dt.timestamp_subsec_nanos() / 100
    )
}
