//! pg_stat_user_tables and pg_statio_user_tables collection.

use postgres::Row;

use crate::collector::CollectError;
use crate::model::{Snapshot, TableIoRow, TableOpsRow, counter};

use super::PostgresCollector;
use super::queries::{build_stat_user_tables_query, build_statio_user_tables_query};

impl PostgresCollector {
    /// Collects per-table scan and tuple-write counters.
    ///
    /// Only covers the database the collector is connected to.
    pub fn collect_table_ops(&mut self) -> Result<Snapshot<TableOpsRow>, CollectError> {
        self.collect_with("table_ops", build_stat_user_tables_query(), parse_table_ops_row)
    }

    /// Collects per-table heap and index block I/O counters.
    pub fn collect_table_io(&mut self) -> Result<Snapshot<TableIoRow>, CollectError> {
        self.collect_with("table_io", build_statio_user_tables_query(), parse_table_io_row)
    }
}

fn parse_table_ops_row(row: &Row) -> Option<TableOpsRow> {
    Some(TableOpsRow {
        name: row.try_get("name").ok()?,
        seq_scan: counter(row.try_get("seq_scan").ok()?),
        seq_tup_read: counter(row.try_get("seq_tup_read").ok()?),
        idx_scan: counter(row.try_get("idx_scan").ok()?),
        idx_tup_fetch: counter(row.try_get("idx_tup_fetch").ok()?),
        n_tup_ins: counter(row.try_get("n_tup_ins").ok()?),
        n_tup_upd: counter(row.try_get("n_tup_upd").ok()?),
        n_tup_del: counter(row.try_get("n_tup_del").ok()?),
    })
}

fn parse_table_io_row(row: &Row) -> Option<TableIoRow> {
    Some(TableIoRow {
        name: row.try_get("name").ok()?,
        heap_blks_read: counter(row.try_get("heap_blks_read").ok()?),
        heap_blks_hit: counter(row.try_get("heap_blks_hit").ok()?),
        idx_blks_read: counter(row.try_get("idx_blks_read").ok()?),
        idx_blks_hit: counter(row.try_get("idx_blks_hit").ok()?),
    })
}
