//! Per-role activity, `pg_stat_statements` summed by user.

use serde::Serialize;

use super::CounterRow;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct UserRow {
    /// Role name.
    pub name: String,
    pub calls: u64,
    /// Total execution time in microseconds.
    pub exec_time_us: u64,
    pub rows: u64,
    pub temp_blks_written: u64,
}

impl CounterRow for UserRow {
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
        self.temp_blks_written = self.temp_blks_written.saturating_add(other.temp_blks_written);
    }

    fn checked_sub(&self, base: &Self) -> Option<Self> {
        Some(Self {
            name: self.name.clone(),
            calls: self.calls.checked_sub(base.calls)?,
            exec_time_us: self.exec_time_us.checked_sub(base.exec_time_us)?,
            rows: self.rows.checked_sub(base.rows)?,
            temp_blks_written: self.temp_blks_written.checked_sub(base.temp_blks_written)?,
        })
    }
}
