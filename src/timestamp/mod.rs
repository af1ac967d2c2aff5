//! Timestamp handling.
//!
//! A timestamp enters the codec as an ISO-8601 trailing line of the Human
//! text and travels inside the coded text as five invisible code points.

pub mod invisible;
pub mod trailing;

pub use invisible::{inject, read_invisible_timestamp, strip_invisible_timestamp};
pub use trailing::{attach, detach};
