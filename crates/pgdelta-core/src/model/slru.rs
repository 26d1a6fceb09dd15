//! SLRU cache activity (`pg_stat_slru`, PostgreSQL 13+).

use serde::Serialize;

use super::CounterRow;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SlruRow {
    /// SLRU cache name, e.g. `Xact` or `MultiXactMember`.
    pub name: String,
    pub blks_zeroed: u64,
    pub blks_hit: u64,
    pub blks_read: u64,
    pub blks_written: u64,
    pub flushes: u64,
    pub truncates: u64,
}

impl CounterRow for SlruRow {
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
        self.blks_hit.saturating_add(self.blks_read)
    }

    fn add(&mut self, other: &Self) {
        self.blks_zeroed = self.blks_zeroed.saturating_add(other.blks_zeroed);
        self.blks_hit = self.blks_hit.saturating_add(other.blks_hit);
        self.blks_read = self.blks_read.saturating_add(other.blks_read);
        self.blks_written = self.blks_written.saturating_add(other.blks_written);
        self.flushes = self.flushes.saturating_add(other.flushes);
        self.truncates = self.truncates.saturating_add(other.truncates);
    }

    fn checked_sub(&self, base: &Self) -> Option<Self> {
        Some(Self {
            name: self.name.clone(),
            blks_zeroed: self.blks_zeroed.checked_sub(base.blks_zeroed)?,
            blks_hit: self.blks_hit.checked_sub(base.blks_hit)?,
            blks_read: self.blks_read.checked_sub(base.blks_read)?,
            blks_written: self.blks_written.checked_sub(base.blks_written)?,
            flushes: self.flushes.checked_sub(base.flushes)?,
            truncates: self.truncates.checked_sub(base.truncates)?,
        })
    }
}
