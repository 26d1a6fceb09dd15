//! Per-database activity (`pg_stat_database`).

use serde::Serialize;

use super::CounterRow;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct DatabaseRow {
    pub name: String,
    pub xact_commit: u64,
    pub xact_rollback: u64,
    pub blks_read: u64,
    pub blks_hit: u64,
    pub tup_returned: u64,
    /// Inserted + updated + deleted tuples.
    pub tup_written: u64,
}

impl DatabaseRow {
    pub fn transactions(&self) -> u64 {
        self.xact_commit.saturating_add(self.xact_rollback)
    }
}

impl CounterRow for DatabaseRow {
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
        self.transactions()
    }

    fn add(&mut self, other: &Self) {
        self.xact_commit = self.xact_commit.saturating_add(other.xact_commit);
        self.xact_rollback = self.xact_rollback.saturating_add(other.xact_rollback);
        self.blks_read = self.blks_read.saturating_add(other.blks_read);
        self.blks_hit = self.blks_hit.saturating_add(other.blks_hit);
        self.tup_returned = self.tup_returned.saturating_add(other.tup_returned);
        self.tup_written = self.tup_written.saturating_add(other.tup_written);
    }

    fn checked_sub(&self, base: &Self) -> Option<Self> {
        Some(Self {
            name: self.name.clone(),
            xact_commit: self.xact_commit.checked_sub(base.xact_commit)?,
            xact_rollback: self.xact_rollback.checked_sub(base.xact_rollback)?,
            blks_read: self.blks_read.checked_sub(base.blks_read)?,
            blks_hit: self.blks_hit.checked_sub(base.blks_hit)?,
            tup_returned: self.tup_returned.checked_sub(base.tup_returned)?,
            tup_written: self.tup_written.checked_sub(base.tup_written)?,
        })
    }
}
