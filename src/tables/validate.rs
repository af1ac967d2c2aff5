//! Startup validation of the static tables.
//!
//! The codec never fails on input. The only hard failures are broken tables,
//! and those are caught here once, before any text is processed.

use std::collections::{HashMap, HashSet};

use log::{debug, error};
use once_cell::sync::Lazy;
use thiserror::Error;

use super::alphabets::Component;
use super::maps::{CONJUNCTION_MAP, CONJUNCTION_VALUE_LETTERS, LETTER_MAP, PUNCTUATION_MAP};
use super::wheels::{BASE_VOWELS, ONE_RUNE_WHEEL, TWO_RUNE_WHEEL};
use super::{is_reserved, INTERNAL_ESCAPE, OUTPUT_ESCAPE};
use crate::text::case::lower_round_trips;
use crate::text::substitution::SubstitutionMap;

/// Errors raised by table validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Key and value of a pair have different code-point lengths.
    #[error("{table}: key {key:?} ({key_len}) and value {value:?} ({value_len}) must have equal lengths")]
    LengthMismatch {
        table: &'static str,
        key: String,
        key_len: usize,
        value: String,
        value_len: usize,
    },

    /// A letter key or value is not exactly one code point.
    #[error("letter map: {0:?} must be exactly one code point")]
    NotSingleCodePoint(String),

    /// Two keys share the same value.
    #[error("{table}: value {value:?} used by both {first:?} and {second:?}")]
    DuplicateValue {
        table: &'static str,
        value: String,
        first: String,
        second: String,
    },

    /// A letter value does not map back to its key.
    #[error("letter map: {key:?} -> {value:?} has no matching reverse pair")]
    BrokenReverse { key: String, value: String },

    /// A conjunction value uses a letter that may collide with another layer.
    #[error("conjunction map: value {value:?} uses disallowed letter {letter:?}")]
    ConjunctionLetter { value: String, letter: char },

    /// A conjunction value is a prefix of a longer one.
    #[error("conjunction map: value {shorter:?} is a prefix of {longer:?}")]
    ConjunctionPrefix { shorter: String, longer: String },

    /// An escape character shows up in the punctuation map.
    #[error("punctuation map contains escape character {0:?}")]
    EscapeInPunctuation(char),

    /// An alphabet has the wrong number of entries.
    #[error("{name} alphabet must have {expected} entries, got {actual}")]
    AlphabetSize {
        name: &'static str,
        expected: usize,
        actual: usize,
    },

    /// A code point appears twice across the alphabets.
    #[error("code point {c:?} appears in {first} and {second}")]
    DuplicateAlphabetChar {
        c: char,
        first: String,
        second: String,
    },

    /// A base vowel has no wheel.
    #[error("{wheel} wheel is missing base vowel {base:?}")]
    MissingWheel { wheel: &'static str, base: char },

    /// A wheel entry has the wrong number of code points.
    #[error("{wheel} wheel[{base:?}][{index}] has {actual} code points, expected {expected}")]
    WheelEntryLength {
        wheel: &'static str,
        base: char,
        index: usize,
        expected: usize,
        actual: usize,
    },

    /// A wheel entry whose case does not survive a round trip.
    #[error("{wheel} wheel[{base:?}][{index}] has non-reversible case")]
    IrreversibleCase {
        wheel: &'static str,
        base: char,
        index: usize,
    },

    /// Both escapes are the same character.
    #[error("internal and output escape must differ")]
    EscapesEqual,

    /// An alphabet code point is also used by a map or wheel.
    #[error("alphabet code point {c:?} also appears in {table}")]
    AlphabetCollision { c: char, table: &'static str },

    /// A reserved code point is used by a table.
    #[error("reserved code point {c:?} appears in {table}")]
    ReservedCodePoint { c: char, table: &'static str },

    /// A table produced no inverse rules.
    #[error("{0}: inverse mapping is empty")]
    EmptyInverse(&'static str),

    /// Inverse entries collapsed into each other.
    #[error("{table}: {expected} pairs produced {actual} inverse rules")]
    InverseCollision {
        table: &'static str,
        expected: usize,
        actual: usize,
    },
}

type Pairs<'a> = &'a [(&'a str, &'a str)];

/// A borrowed view of every table, so tests can validate altered copies.
#[derive(Debug, Clone, Copy)]
pub struct TableSet<'a> {
    pub letters: Pairs<'a>,
    pub conjunctions: Pairs<'a>,
    pub conjunction_value_letters: &'a [char],
    pub punctuation: Pairs<'a>,
    pub one_rune_wheel: &'a [(char, &'a [char])],
    pub two_rune_wheel: &'a [(char, &'a [&'a str])],
    /// Alphabets in [`Component::ALL`] order.
    pub alphabets: [&'a [char]; 5],
    pub internal_escape: char,
    pub output_escape: char,
}

impl TableSet<'static> {
    /// The tables compiled into the crate.
    pub fn builtin() -> Self {
        Self {
            letters: LETTER_MAP,
            conjunctions: CONJUNCTION_MAP,
            conjunction_value_letters: CONJUNCTION_VALUE_LETTERS,
            punctuation: PUNCTUATION_MAP,
            one_rune_wheel: ONE_RUNE_WHEEL,
            two_rune_wheel: TWO_RUNE_WHEEL,
            alphabets: Component::ALL.map(Component::alphabet),
            internal_escape: INTERNAL_ESCAPE,
            output_escape: OUTPUT_ESCAPE,
        }
    }
}

static BUILTIN_RESULT: Lazy<Result<(), TableError>> = Lazy::new(|| {
    let result = validate(&TableSet::builtin());
    match &result {
        Ok(()) => debug!("tables validated"),
        Err(e) => error!("table validation failed: {}", e),
    }
    result
});

/// Validates the built-in tables. Runs once per process.
pub fn validate_tables() -> Result<(), TableError> {
    BUILTIN_RESULT.clone()
}

/// Validates an arbitrary set of tables.
pub fn validate(tables: &TableSet<'_>) -> Result<(), TableError> {
    check_equal_lengths("conjunction map", tables.conjunctions)?;
    check_equal_lengths("letter map", tables.letters)?;
    check_letters(tables.letters)?;
    check_conjunction_values(tables)?;
    check_punctuation(tables)?;
    check_alphabets(tables)?;
    check_wheels(tables)?;

    if tables.internal_escape == tables.output_escape {
        return Err(TableError::EscapesEqual);
    }

    check_alphabet_collisions(tables)?;
    check_reserved(tables)?;

    check_inverse("conjunction map", tables.conjunctions)?;
    check_inverse("letter map", tables.letters)?;
    check_inverse("punctuation map", tables.punctuation)?;

    Ok(())
}

fn check_equal_lengths(table: &'static str, pairs: Pairs<'_>) -> Result<(), TableError> {
    for &(key, value) in pairs {
        let key_len = key.chars().count();
        let value_len = value.chars().count();
        if key_len != value_len {
            return Err(TableError::LengthMismatch {
                table,
                key: key.to_string(),
                key_len,
                value: value.to_string(),
                value_len,
            });
        }
    }
    Ok(())
}

fn check_unique_values(table: &'static str, pairs: Pairs<'_>) -> Result<(), TableError> {
    let mut seen: HashMap<&str, &str> = HashMap::new();
    for &(key, value) in pairs {
        if let Some(first) = seen.insert(value, key) {
            return Err(TableError::DuplicateValue {
                table,
                value: value.to_string(),
                first: first.to_string(),
                second: key.to_string(),
            });
        }
    }
    Ok(())
}

fn check_letters(pairs: Pairs<'_>) -> Result<(), TableError> {
    for &(key, value) in pairs {
        for s in [key, value] {
            if s.chars().count() != 1 {
                return Err(TableError::NotSingleCodePoint(s.to_string()));
            }
        }
    }

    check_unique_values("letter map", pairs)?;

    let forward: HashMap<&str, &str> = pairs.iter().copied().collect();
    for &(key, value) in pairs {
        if forward.get(value) != Some(&key) {
            return Err(TableError::BrokenReverse {
                key: key.to_string(),
                value: value.to_string(),
            });
        }
    }
    Ok(())
}

fn check_conjunction_values(tables: &TableSet<'_>) -> Result<(), TableError> {
    check_unique_values("conjunction map", tables.conjunctions)?;

    for &(_, value) in tables.conjunctions {
        if let Some(letter) = value
            .chars()
            .find(|c| !tables.conjunction_value_letters.contains(c))
        {
            return Err(TableError::ConjunctionLetter {
                value: value.to_string(),
                letter,
            });
        }
    }

    for &(_, shorter) in tables.conjunctions {
        for &(_, longer) in tables.conjunctions {
            if shorter.len() < longer.len() && longer.starts_with(shorter) {
                return Err(TableError::ConjunctionPrefix {
                    shorter: shorter.to_string(),
                    longer: longer.to_string(),
                });
            }
        }
    }
    Ok(())
}

fn check_punctuation(tables: &TableSet<'_>) -> Result<(), TableError> {
    for &(key, value) in tables.punctuation {
        for c in key.chars().chain(value.chars()) {
            if c == tables.internal_escape || c == tables.output_escape {
                return Err(TableError::EscapeInPunctuation(c));
            }
        }
    }
    check_unique_values("punctuation map", tables.punctuation)
}

fn check_alphabets(tables: &TableSet<'_>) -> Result<(), TableError> {
    let mut seen: HashMap<char, String> = HashMap::new();

    for (component, alphabet) in Component::ALL.iter().zip(tables.alphabets.iter()) {
        for (i, &c) in alphabet.iter().enumerate() {
            let here = format!("{}[{}]", component.name(), i);
            if let Some(first) = seen.insert(c, here.clone()) {
                return Err(TableError::DuplicateAlphabetChar {
                    c,
                    first,
                    second: here,
                });
            }
        }
    }

    for c in [tables.internal_escape, tables.output_escape] {
        if seen.contains_key(&c) {
            return Err(TableError::ReservedCodePoint {
                c,
                table: "alphabets",
            });
        }
    }

    for (component, alphabet) in Component::ALL.iter().zip(tables.alphabets.iter()) {
        if alphabet.len() != component.expected_len() {
            return Err(TableError::AlphabetSize {
                name: component.name(),
                expected: component.expected_len(),
                actual: alphabet.len(),
            });
        }
    }
    Ok(())
}

fn check_wheels(tables: &TableSet<'_>) -> Result<(), TableError> {
    for base in BASE_VOWELS {
        if !tables.one_rune_wheel.iter().any(|(b, _)| *b == base) {
            return Err(TableError::MissingWheel {
                wheel: "one-rune",
                base,
            });
        }
        if !tables.two_rune_wheel.iter().any(|(b, _)| *b == base) {
            return Err(TableError::MissingWheel {
                wheel: "two-rune",
                base,
            });
        }
    }

    for &(base, wheel) in tables.one_rune_wheel {
        for (index, &c) in wheel.iter().enumerate() {
            if !lower_round_trips(c) {
                return Err(TableError::IrreversibleCase {
                    wheel: "one-rune",
                    base,
                    index,
                });
            }
        }
    }

    for &(base, wheel) in tables.two_rune_wheel {
        for (index, entry) in wheel.iter().enumerate() {
            let actual = entry.chars().count();
            if actual != 2 {
                return Err(TableError::WheelEntryLength {
                    wheel: "two-rune",
                    base,
                    index,
                    expected: 2,
                    actual,
                });
            }
            if !entry.chars().next().map_or(false, lower_round_trips) {
                return Err(TableError::IrreversibleCase {
                    wheel: "two-rune",
                    base,
                    index,
                });
            }
        }
    }
    Ok(())
}

/// Every code point used by a map or wheel, tagged with its table.
fn table_chars<'a>(tables: &'a TableSet<'a>) -> Vec<(char, &'static str)> {
    let mut chars = Vec::new();
    let maps: [(&'static str, Pairs<'a>); 3] = [
        ("letter map", tables.letters),
        ("conjunction map", tables.conjunctions),
        ("punctuation map", tables.punctuation),
    ];
    for (name, pairs) in maps {
        for &(key, value) in pairs {
            chars.extend(key.chars().chain(value.chars()).map(|c| (c, name)));
        }
    }
    for &(base, wheel) in tables.one_rune_wheel {
        chars.push((base, "one-rune wheel"));
        chars.extend(wheel.iter().map(|&c| (c, "one-rune wheel")));
    }
    for &(base, wheel) in tables.two_rune_wheel {
        chars.push((base, "two-rune wheel"));
        for entry in wheel.iter() {
            chars.extend(entry.chars().map(|c| (c, "two-rune wheel")));
        }
    }
    chars
}

fn check_alphabet_collisions(tables: &TableSet<'_>) -> Result<(), TableError> {
    let alphabet_chars: HashSet<char> = tables
        .alphabets
        .iter()
        .flat_map(|alphabet| alphabet.iter().copied())
        .collect();

    for (c, table) in table_chars(tables) {
        if alphabet_chars.contains(&c) {
            return Err(TableError::AlphabetCollision { c, table });
        }
    }
    Ok(())
}

fn check_reserved(tables: &TableSet<'_>) -> Result<(), TableError> {
    for (c, table) in table_chars(tables) {
        if is_reserved(c) {
            return Err(TableError::ReservedCodePoint { c, table });
        }
    }
    for alphabet in tables.alphabets {
        if let Some(&c) = alphabet.iter().find(|&&c| is_reserved(c)) {
            return Err(TableError::ReservedCodePoint {
                c,
                table: "alphabets",
            });
        }
    }
    Ok(())
}

fn check_inverse(table: &'static str, pairs: Pairs<'_>) -> Result<(), TableError> {
    let map = SubstitutionMap::from_pairs(pairs);
    let actual = map.inverse_len();
    if actual == 0 {
        return Err(TableError::EmptyInverse(table));
    }
    if actual != pairs.len() {
        return Err(TableError::InverseCollision {
            table,
            expected: pairs.len(),
            actual,
        });
    }
    Ok(())
}
