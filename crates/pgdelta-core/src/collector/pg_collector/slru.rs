//! pg_stat_slru collection.

use chrono::Utc;
use postgres::Row;

use crate::collector::CollectError;
use crate::model::{SlruRow, Snapshot, counter};

use super::PostgresCollector;
use super::queries::build_stat_slru_query;

impl PostgresCollector {
    /// Collects SLRU cache counters. Empty before PostgreSQL 13.
    pub fn collect_slru(&mut self) -> Result<Snapshot<SlruRow>, CollectError> {
        self.ensure_connected()?;
        match build_stat_slru_query(self.server_version_num) {
            Some(query) => self.collect_with("slru", query, parse_slru_row),
            None => Ok(Snapshot::new(Vec::new(), Utc::now())),
        }
    }
}

fn parse_slru_row(row: &Row) -> Option<SlruRow> {
    Some(SlruRow {
        name: row.try_get("name").ok()?,
        blks_zeroed: counter(row.try_get("blks_zeroed").ok()?),
        blks_hit: counter(row.try_get("blks_hit").ok()?),
        blks_read: counter(row.try_get("blks_read").ok()?),
        blks_written: counter(row.try_get("blks_written").ok()?),
        flushes: counter(row.try_get("flushes").ok()?),
        truncates: counter(row.try_get("truncates").ok()?),
    })
}
