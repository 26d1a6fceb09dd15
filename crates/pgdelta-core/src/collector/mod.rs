//! Snapshot sources.
//!
//! A [`SnapshotSource`] returns the current counter rows of one domain. The
//! engine never talks to PostgreSQL directly; it only sees this trait.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     MetricTable<R, S>                    │
//! │                            │                             │
//! │                  ┌─────────▼─────────┐                   │
//! │                  │ SnapshotSource<R> │ (trait)           │
//! │                  └─────────┬─────────┘                   │
//! └────────────────────────────┼─────────────────────────────┘
//!                ┌─────────────┴─────────────┐
//!         ┌──────▼──────┐             ┌──────▼──────┐
//!         │  PgSource   │             │ MockSource  │
//!         │ (postgres)  │             │ (testing)   │
//!         └──────┬──────┘             └─────────────┘
//!                │ shared
//!       ┌────────▼──────────┐
//!       │ PostgresCollector │ one connection, reconnects on failure
//!       └───────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use pgdelta_core::collector::{MockSource, SnapshotSource};
//! use pgdelta_core::model::DatabaseRow;
//!
//! let mut source = MockSource::new(vec![vec![DatabaseRow {
//!     name: "app".to_string(),
//!     xact_commit: 10,
//!     ..DatabaseRow::default()
//! }]]);
//! let snapshot = source.collect().unwrap();
//! assert_eq!(snapshot.len(), 1);
//! ```

mod error;
pub mod mock;
mod pg_collector;
mod traits;

pub use error::CollectError;
pub use mock::MockSource;
pub use pg_collector::{PgSource, PostgresCollector, SharedCollector};
pub use traits::SnapshotSource;
