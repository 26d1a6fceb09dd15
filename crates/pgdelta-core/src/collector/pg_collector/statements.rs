//! pg_stat_statements collection, per query and per role.
//!
//! When the extension is not installed in the connected database, or not
//! loaded via `shared_preload_libraries`, both domains report no rows.

use postgres::Row;

use crate::collector::CollectError;
use crate::model::{Snapshot, StatementRow, UserRow, counter};

use super::PostgresCollector;
use super::queries::{build_stat_statements_by_user_query, build_stat_statements_query};

impl PostgresCollector {
    /// Collects execution counters summed by normalized query text.
    pub fn collect_statements(&mut self) -> Result<Snapshot<StatementRow>, CollectError> {
        self.ensure_connected()?;
        let query = build_stat_statements_query(self.server_version_num);
        self.collect_with("statements", &query, parse_statement_row)
    }

    /// Collects execution counters summed by role.
    pub fn collect_users(&mut self) -> Result<Snapshot<UserRow>, CollectError> {
        self.ensure_connected()?;
        let query = build_stat_statements_by_user_query(self.server_version_num);
        self.collect_with("users", &query, parse_user_row)
    }
}

fn parse_statement_row(row: &Row) -> Option<StatementRow> {
    Some(StatementRow {
        name: row.try_get("name").ok()?,
        calls: counter(row.try_get("calls").ok()?),
        exec_time_us: counter(row.try_get("exec_time_us").ok()?),
        rows: counter(row.try_get("rows").ok()?),
        shared_blks_read: counter(row.try_get("shared_blks_read").ok()?),
        shared_blks_hit: counter(row.try_get("shared_blks_hit").ok()?),
    })
}

fn parse_user_row(row: &Row) -> Option<UserRow> {
    Some(UserRow {
        name: row.try_get("name").ok()?,
        calls: counter(row.try_get("calls").ok()?),
        exec_time_us: counter(row.try_get("exec_time_us").ok()?),
        rows: counter(row.try_get("rows").ok()?),
        temp_blks_written: counter(row.try_get("temp_blks_written").ok()?),
    })
}
