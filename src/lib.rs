//! # Pejelagarto - a reversible text codec
//!
//! Pejelagarto rewrites Human text into a playful coded form and back again
//! without losing a single byte.
//!
//! ## Overview
//!
//! Encoding runs a fixed chain of reversible stages:
//! - Invalid UTF-8 bytes are **sanitized** into invisible escape pairs
//! - Numbers are rewritten in **base 8** (positive) or **base 7** (negative)
//! - Punctuation, letters and common **conjunctions** are substituted
//! - Vowel accents **rotate** by the prime factorization of the text length
//! - Letter case **flips** at Fibonacci or Tribonacci positions
//! - A **timestamp** hides in five invisible code points
//!
//! Decoding applies the inverse stages in reverse order and appends the
//! hidden timestamp as a last ISO-8601 line.
//!
//! ## Guarantees
//!
//! - **Never fails**: every byte sequence encodes, every string decodes
//! - **Lossless**: decode(encode(x)) == x once the timestamp is stripped
//! - **Stateless**: tables are immutable and validated once per process
//!
//! ## Example Usage
//!
//! ```rust
//! use pejelagarto::{decode, encode, strip_invisible_timestamp};
//!
//! let coded = encode("hello world".as_bytes());
//!
//! // The coded text carries the current time in invisible code points
//! let decoded = decode(&strip_invisible_timestamp(&coded));
//! assert_eq!(decoded, b"hello world");
//! ```
//!
//! ## Modules
//!
//! - [`tables`]: Substitution maps, vowel wheels, invisible alphabets and their validation
//! - [`text`]: Case helpers, escapes and the layered substitution engine
//! - [`transform`]: The reversible stages
//! - [`timestamp`]: Trailing ISO-8601 lines and the invisible channel
//! - [`encoder`] / [`decoder`]: The two pipelines
//! - [`config`]: User settings file

pub mod config;
pub mod decoder;
pub mod encoder;
pub mod logging;
pub mod tables;
pub mod text;
pub mod timestamp;
pub mod transform;
pub mod translator;

// Re-export commonly used types at the crate root
pub use config::{ConfigError, Settings};
pub use decoder::{decode, decode_to_string, decode_with_config, DecoderConfig};
pub use encoder::{encode, encode_with_config, EncoderConfig};
pub use tables::{validate_tables, TableError};
pub use timestamp::{read_invisible_timestamp, strip_invisible_timestamp};
pub use translator::Translator;
