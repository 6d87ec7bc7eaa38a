//! intake-core
//!
//! Pure domain types, positional row codecs, and spreadsheet range
//! conventions. No network dependency; this is the shared vocabulary of
//! the intake system.

pub mod error;
pub mod models;
pub mod ranges;
