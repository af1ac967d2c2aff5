//! Pejelagarto to Human.
//!
//! Decoding never fails. Text that was not produced by the encoder simply
//! comes out rewritten by the inverse stages.

use log::debug;

use crate::encoder::Stage;
use crate::tables;
use crate::timestamp::{read_invisible_timestamp, strip_invisible_timestamp, trailing};
use crate::transform::{accents, case_flip, letters, numbers, punctuation, unsanitize};

/// Decoding stages in the order they run.
const STAGES: [Stage; 5] = [
    ("case", case_flip::flip_case),
    ("accents", accents::from_pejelagarto),
    ("letters", letters::from_pejelagarto),
    ("punctuation", punctuation::from_pejelagarto),
    ("numbers", numbers::from_pejelagarto),
];

/// Configuration for the decoder.
#[derive(Debug, Clone, Default)]
pub struct DecoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
}

/// Decodes Pejelagarto text back to the original bytes.
///
/// When the text carries an invisible timestamp it is appended as a new
/// last line in `YYYY-MM-DDTHH:MM:00Z` form.
pub fn decode(input: &str) -> Vec<u8> {
    decode_with_config(input, &DecoderConfig::default())
}

/// Decodes with custom configuration.
pub fn decode_with_config(input: &str, config: &DecoderConfig) -> Vec<u8> {
    tables::ensure_valid();

    // Step 1: Read the timestamp before scrubbing it
    let timestamp = read_invisible_timestamp(input);

    if config.verbose {
        match &timestamp {
            Some(ts) => eprintln!("Invisible timestamp: {}", ts),
            None => eprintln!("No invisible timestamp found"),
        }
    }

    // Step 2: Scrub the invisible channel
    let mut text = strip_invisible_timestamp(input);

    // Step 3: Inverse stages
    for (name, stage) in STAGES {
        text = stage(&text);
        debug!("event=decode_stage stage={} chars={}", name, text.chars().count());
        if config.verbose {
            eprintln!("After {}: {:?}", name, text);
        }
    }

    // Step 4: Timestamp becomes the last line
    let text = trailing::attach(&text, timestamp.as_deref().unwrap_or_default());

    // Step 5: Restore sanitized bytes
    unsanitize(&text)
}

/// Decodes and converts the result to a `String`, replacing invalid UTF-8.
pub fn decode_to_string(input: &str) -> String {
    String::from_utf8_lossy(&decode(input)).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{encode_with_config, EncoderConfig};
    use chrono::{TimeZone, Utc};

    fn config() -> EncoderConfig {
        EncoderConfig {
            seed: Some(3),
            clock: Some(Utc.with_ymd_and_hms(2026, 10, 19, 8, 0, 0).unwrap()),
            ..EncoderConfig::default()
        }
    }

    #[test]
    fn test_round_trip_appends_timestamp() {
        let coded = encode_with_config(b"hello world", &config());
        assert_eq!(decode_to_string(&coded), "hello world\n2026-10-19T08:00:00Z");
    }

    #[test]
    fn test_round_trip_without_timestamp() {
        let coded = encode_with_config(b"hello world", &config());
        assert_eq!(decode(&strip_invisible_timestamp(&coded)), b"hello world");
    }

    #[test]
    fn test_empty_text_decodes_to_timestamp_only() {
        let coded = encode_with_config(b"", &config());
        assert_eq!(decode_to_string(&coded), "2026-10-19T08:00:00Z");
    }

    #[test]
    fn test_invalid_bytes_survive() {
        let input = [b'o', b'k', 0xFF, 0xFE, b' ', 0xC0];
        let coded = encode_with_config(&input, &config());
        assert_eq!(decode(&strip_invisible_timestamp(&coded)), input);
    }

    #[test]
    fn test_plain_text_decodes_without_panic() {
        let decoded = decode_to_string("just some text that was never encoded 123");
        assert!(!decoded.is_empty());
    }
}
