//! Text primitives shared by every pipeline stage.
//!
//! This module provides:
//! - Simple, reversible case mapping
//! - The internal and output escape schemes
//! - The layered substitution engine used by the letter and punctuation stages

pub mod case;
pub mod escape;
pub mod substitution;

pub use case::{eq_ignore_case, invert_case, to_lower, to_upper};
pub use escape::{output_escape, output_unescape};
pub use substitution::{apply_rules, Direction, Rule, SubstitutionMap};
