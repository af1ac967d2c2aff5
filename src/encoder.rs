//! Human to Pejelagarto.
//!
//! This module orchestrates the encoding pipeline:
//! 1. Sanitize invalid UTF-8 bytes
//! 2. Scrub code points that belong to the timestamp alphabets
//! 3. Detach a trailing ISO-8601 line
//! 4. Run the reversible stages (numbers, punctuation, letters, accents, case)
//! 5. Inject the invisible timestamp

use chrono::{DateTime, Utc};
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::tables;
use crate::timestamp::{self, strip_invisible_timestamp, trailing};
use crate::transform::{accents, case_flip, letters, numbers, punctuation, sanitize_bytes};

/// A named text-to-text stage.
pub(crate) type Stage = (&'static str, fn(&str) -> String);

/// Encoding stages in the order they run.
pub(crate) const STAGES: [Stage; 5] = [
    ("numbers", numbers::to_pejelagarto),
    ("punctuation", punctuation::to_pejelagarto),
    ("letters", letters::to_pejelagarto),
    ("accents", accents::to_pejelagarto),
    ("case", case_flip::flip_case),
];

/// Configuration for the encoder.
#[derive(Debug, Clone, Default)]
pub struct EncoderConfig {
    /// Whether to output verbose information.
    pub verbose: bool,
    /// Seed for the timestamp position shuffle. `None` draws from the OS.
    pub seed: Option<u64>,
    /// Instant used when the input carries no trailing timestamp.
    /// `None` reads the wall clock.
    pub clock: Option<DateTime<Utc>>,
}

/// Encodes Human bytes into Pejelagarto text.
///
/// Never fails: any byte sequence produces a coded string.
pub fn encode(input: &[u8]) -> String {
    encode_with_config(input, &EncoderConfig::default())
}

/// Encodes Human bytes with custom configuration.
pub fn encode_with_config(input: &[u8], config: &EncoderConfig) -> String {
    tables::ensure_valid();

    // Step 1: Make the bytes valid text
    let text = sanitize_bytes(input);

    // Step 2: Alphabet code points would be read back as a timestamp
    let text = strip_invisible_timestamp(&text);

    // Step 3: A trailing timestamp line travels in the invisible channel
    let (mut text, trailing_line) = trailing::detach(&text);

    if config.verbose {
        if let Some(line) = &trailing_line {
            eprintln!("Detached trailing timestamp: {}", line);
        }
    }

    // Step 4: Reversible stages
    for (name, stage) in STAGES {
        text = stage(&text);
        debug!("event=encode_stage stage={} chars={}", name, text.chars().count());
        if config.verbose {
            eprintln!("After {}: {:?}", name, text);
        }
    }

    // Step 5: Invisible timestamp
    let instant = trailing_line
        .as_deref()
        .and_then(trailing::parse)
        .or(config.clock)
        .unwrap_or_else(Utc::now);

    let mut rng = match config.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };

    let coded = timestamp::inject(&text, &instant, &mut rng);

    if config.verbose {
        eprintln!("Timestamp: {}", instant.format("%Y-%m-%dT%H:%M:00Z"));
    }

    coded
}
