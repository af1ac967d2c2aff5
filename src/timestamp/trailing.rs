//! ISO-8601 trailing line.

use chrono::{DateTime, Utc};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;

static TRAILING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:Z|[+-][0-9]{2}:[0-9]{2})$")
        .expect("valid trailing timestamp regex")
});

/// Splits off the last line when it is an ISO-8601 timestamp.
///
/// Returns the remaining text and the timestamp line, if any. The newline in
/// front of the timestamp goes with it.
pub fn detach(input: &str) -> (String, Option<String>) {
    let (head, last) = match input.rsplit_once('\n') {
        Some((head, last)) => (head, last),
        None => ("", input),
    };

    if TRAILING_RE.is_match(last) {
        (head.to_string(), Some(last.to_string()))
    } else {
        (input.to_string(), None)
    }
}

/// Appends `timestamp` as a new last line. Empty text gets the timestamp alone.
pub fn attach(input: &str, timestamp: &str) -> String {
    if timestamp.is_empty() {
        return input.to_string();
    }
    if input.is_empty() {
        return timestamp.to_string();
    }
    format!("{}\n{}", input, timestamp)
}

/// Parses a detached timestamp line as RFC 3339.
pub fn parse(timestamp: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(e) => {
            warn!("event=timestamp_parse_failed value={} error={}", timestamp, e);
            None
        }
    }
}
