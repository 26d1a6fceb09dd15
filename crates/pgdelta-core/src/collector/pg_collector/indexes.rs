//! pg_stat_user_indexes collection.

use postgres::Row;

use crate::collector::CollectError;
use crate::model::{IndexUsageRow, Snapshot, counter};

use super::PostgresCollector;
use super::queries::build_stat_user_indexes_query;

impl PostgresCollector {
    /// Collects per-index scan counters.
    pub fn collect_index_usage(&mut self) -> Result<Snapshot<IndexUsageRow>, CollectError> {
        self.collect_with("index_usage", build_stat_user_indexes_query(), parse_index_row)
    }
}

fn parse_index_row(row: &Row) -> Option<IndexUsageRow> {
    Some(IndexUsageRow {
        name: row.try_get("name").ok()?,
        idx_scan: counter(row.try_get("idx_scan").ok()?),
        idx_tup_read: counter(row.try_get("idx_tup_read").ok()?),
        idx_tup_fetch: counter(row.try_get("idx_tup_fetch").ok()?),
    })
}
