//! Per-statement execution statistics (`pg_stat_statements`).

use serde::Serialize;

use super::CounterRow;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct StatementRow {
    /// Normalized query text.
    pub name: String,
    pub calls: u64,
    /// Total execution time in microseconds.
    pub exec_time_us: u64,
    pub rows: u64,
    pub shared_blks_read: u64,
    pub shared_blks_hit: u64,
}

impl CounterRow for StatementRow {
    fn name(&self) -> &str {
        &self.name
    }

    fn zeroed(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    fn primary(&self) -> u64 {
        self.exec_time_us
    }

    fn add(&mut self, other: &Self) {
        self.calls = self.calls.saturating_add(other.calls);
        self.exec_time_us = self.exec_time_us.saturating_add(other.exec_time_us);
        self.rows = self.rows.saturating_add(other.rows);
        self.shared_blks_read = self.shared_blks_read.saturating_add(other.shared_blks_read);
        self.shared_blks_hit = self.shared_blks_hit.saturating_add(other.shared_blks_hit);
    }

    fn checked_sub(&self, base: &Self) -> Option<Self> {
        Some(Self {
            name: self.name.clone(),
            calls: self.calls.checked_sub(base.calls)?,
            exec_time_us: self.exec_time_us.checked_sub(base.exec_time_us)?,
            rows: self.rows.checked_sub(base.rows)?,
            shared_blks_read: self.shared_blks_read.checked_sub(base.shared_blks_read)?,
            shared_blks_hit: self.shared_blks_hit.checked_sub(base.shared_blks_hit)?,
        })
    }
}
