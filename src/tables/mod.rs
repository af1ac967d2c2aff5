//! Static tables of the codec.
//!
//! This module provides:
//! - Letter, conjunction and punctuation substitution maps
//! - Vowel wheels for the accent rotation
//! - The five invisible alphabets carrying the timestamp
//! - Reserved code points and startup validation of all of the above

pub mod alphabets;
pub mod maps;
pub mod validate;
pub mod wheels;

pub use alphabets::{is_alphabet_char, Component, BASE_YEAR};
pub use maps::{CONJUNCTION_MAP, LETTER_MAP, PUNCTUATION_MAP};
pub use validate::{validate, validate_tables, TableError, TableSet};

/// Internal escape. Only lives between pipeline steps.
pub const INTERNAL_ESCAPE: char = '\\';

/// Output escape (soft hyphen). Persists in coded text.
pub const OUTPUT_ESCAPE: char = '\u{00AD}';

/// Prefix of a coded multi-code-point replacement.
pub const QUOTE_MARKER: char = '\'';

/// Opens a region rewritten during the current substitution pass.
pub const START_MARKER: char = '\u{FFF0}';

/// Closes a region rewritten during the current substitution pass.
pub const END_MARKER: char = '\u{FFF1}';

/// Invisible prefix of a sanitized byte.
pub const BYTE_MARKER: char = '\u{3164}';

/// First code point of the sanitized byte range (`U+E000 + byte`).
pub const BYTE_RANGE_START: u32 = 0xE000;

/// Panics when the built-in tables are broken.
///
/// Validation runs once per process; later calls only read the cached result.
pub fn ensure_valid() {
    if let Err(e) = validate_tables() {
        panic!("built-in tables are invalid: {}", e);
    }
}

/// True for code points no table may contain.
pub fn is_reserved(c: char) -> bool {
    matches!(
        c,
        INTERNAL_ESCAPE | OUTPUT_ESCAPE | QUOTE_MARKER | START_MARKER | END_MARKER | BYTE_MARKER
    ) || (BYTE_RANGE_START..BYTE_RANGE_START + 0x100).contains(&u32::from(c))
}
