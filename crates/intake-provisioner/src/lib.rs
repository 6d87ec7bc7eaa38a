//! intake-provisioner
//!
//! Client intake: creates the per-client document, registers the client
//! centrally, and populates one tab per assigned form with its question
//! list and a "Not Started" status in both tracking tables.

pub mod error;
pub mod populate;
pub mod provision;
