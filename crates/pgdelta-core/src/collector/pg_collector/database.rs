//! pg_stat_database collection.

use postgres::Row;

use crate::collector::CollectError;
use crate::model::{DatabaseRow, Snapshot, counter};

use super::PostgresCollector;
use super::queries::build_stat_database_query;

impl PostgresCollector {
    /// Collects per-database transaction and block counters.
    pub fn collect_databases(&mut self) -> Result<Snapshot<DatabaseRow>, CollectError> {
        self.collect_with("databases", build_stat_database_query(), parse_database_row)
    }
}

fn parse_database_row(row: &Row) -> Option<DatabaseRow> {
    Some(DatabaseRow {
        name: row.try_get("name").ok()?,
        xact_commit: counter(row.try_get("xact_commit").ok()?),
        xact_rollback: counter(row.try_get("xact_rollback").ok()?),
        blks_read: counter(row.try_get("blks_read").ok()?),
        blks_hit: counter(row.try_get("blks_hit").ok()?),
        tup_returned: counter(row.try_get("tup_returned").ok()?),
        tup_written: counter(row.try_get("tup_written").ok()?),
    })
}
