//! Counter rows and snapshots.
//!
//! Every metric domain is a row type implementing [`CounterRow`]. The engine
//! only ever touches rows through this trait, so the baseline/delta logic is
//! written once and shared by all domains:
//!
//! - `databases` — [`DatabaseRow`] (`pg_stat_database`)
//! - `table_ops` — [`TableOpsRow`] (`pg_stat_user_tables`)
//! - `table_io` — [`TableIoRow`] (`pg_statio_user_tables`)
//! - `index_usage` — [`IndexUsageRow`] (`pg_stat_user_indexes`)
//! - `statements` — [`StatementRow`] (`pg_stat_statements`)
//! - `users` — [`UserRow`] (`pg_stat_statements` grouped by role)
//! - `slru` — [`SlruRow`] (`pg_stat_slru`)

mod database;
mod index_usage;
mod slru;
mod statements;
mod table_io;
mod table_ops;
mod users;

use chrono::{DateTime, Utc};

pub use database::DatabaseRow;
pub use index_usage::IndexUsageRow;
pub use slru::SlruRow;
pub use statements::StatementRow;
pub use table_io::TableIoRow;
pub use table_ops::TableOpsRow;
pub use users::UserRow;

/// Name of the synthetic row holding the field-wise sum of a snapshot.
pub const TOTALS_NAME: &str = "Totals";

/// One named entity of monotonically increasing counters.
pub trait CounterRow: Clone + std::fmt::Debug + PartialEq {
    /// Identity of the row within a snapshot.
    fn name(&self) -> &str;

    /// Row with the given name and every counter at zero.
    fn zeroed(name: &str) -> Self;

    /// Field used for ordering and for upstream reset detection.
    fn primary(&self) -> u64;

    /// Field-wise saturating addition of `other` into `self`.
    fn add(&mut self, other: &Self);

    /// Field-wise `self - base`.
    ///
    /// Returns `None` if any field of `base` is larger than the same field
    /// of `self`; the row is then left unsubtracted by the caller.
    fn checked_sub(&self, base: &Self) -> Option<Self>;
}

/// Rows of one domain as of a capture time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<R> {
    pub rows: Vec<R>,
    /// `None` until something has been captured.
    pub collected_at: Option<DateTime<Utc>>,
}

impl<R> Default for Snapshot<R> {
    fn default() -> Self {
        Self {
            rows: Vec::new(),
            collected_at: None,
        }
    }
}

impl<R: CounterRow> Snapshot<R> {
    pub fn new(rows: Vec<R>, collected_at: DateTime<Utc>) -> Self {
        Self {
            rows,
            collected_at: Some(collected_at),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Field-wise sum of all rows, named [`TOTALS_NAME`].
    pub fn totals(&self) -> R {
        totals(&self.rows)
    }
}

/// Field-wise sum of `rows`. All zero for an empty slice.
pub fn totals<R: CounterRow>(rows: &[R]) -> R {
    let mut sum = R::zeroed(TOTALS_NAME);
    for row in rows {
        sum.add(row);
    }
    sum
}

/// Converts a PostgreSQL `bigint` counter into `u64`, clamping negatives.
pub(crate) fn counter(v: i64) -> u64 {
    u64::try_from(v).unwrap_or(0)
}
