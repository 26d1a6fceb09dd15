//! Snapshot/baseline/delta engine shared by every metric domain.
//!
//! One collection cycle runs:
//!
//! ```text
//! SnapshotSource::collect ──► BaselineManager::observe ──► derive_results
//!        (current)             (maybe recapture baseline)    (results + totals)
//! ```
//!
//! [`MetricTable`] ties the three together behind the uniform table contract.

mod baseline;
mod delta;
mod table;

pub use baseline::{BaselineDecision, BaselineManager};
pub use delta::{Delta, derive_results, sort_rows};
pub use table::MetricTable;
