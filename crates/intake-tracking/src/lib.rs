//! intake-tracking
//!
//! The synchronization core: row-key matching, central-registry lookup,
//! and the status synchronizer that keeps the per-client `Submissions`
//! table and the central `MeasurementTracking` table in agreement as
//! forms move from "Not Started" to "Completed".

pub mod error;
pub mod locks;
pub mod matcher;
pub mod registry;
pub mod status;
pub mod sync;
