//! The reversible stages of the codec.
//!
//! Each stage exposes a `to_pejelagarto` / `from_pejelagarto` pair. The
//! encoder and decoder chain them in opposite orders.

pub mod accents;
pub mod case_flip;
pub mod letters;
pub mod numbers;
pub mod punctuation;
pub mod sanitize;

pub use case_flip::flip_case;
pub use sanitize::{sanitize_bytes, unsanitize};
