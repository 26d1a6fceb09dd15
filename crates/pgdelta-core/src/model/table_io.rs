//! Per-table buffer I/O (`pg_statio_user_tables`).

use serde::Serialize;

use super::CounterRow;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableIoRow {
    /// `schema.table`
    pub name: String,
    pub heap_blks_read: u64,
    pub heap_blks_hit: u64,
    pub idx_blks_read: u64,
    pub idx_blks_hit: u64,
}

impl TableIoRow {
    pub fn blks_read(&self) -> u64 {
        self.heap_blks_read.saturating_add(self.idx_blks_read)
    }

    pub fn blks_hit(&self) -> u64 {
        self.heap_blks_hit.saturating_add(self.idx_blks_hit)
    }
}

impl CounterRow for TableIoRow {
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
        self.blks_read().saturating_add(self.blks_hit())
    }

    fn add(&mut self, other: &Self) {
        self.heap_blks_read = self.heap_blks_read.saturating_add(other.heap_blks_read);
        self.heap_blks_hit = self.heap_blks_hit.saturating_add(other.heap_blks_hit);
        self.idx_blks_read = self.idx_blks_read.saturating_add(other.idx_blks_read);
        self.idx_blks_hit = self.idx_blks_hit.saturating_add(other.idx_blks_hit);
    }

    fn checked_sub(&self, base: &Self) -> Option<Self> {
        Some(Self {
            name: self.name.clone(),
            heap_blks_read: self.heap_blks_read.checked_sub(base.heap_blks_read)?,
            heap_blks_hit: self.heap_blks_hit.checked_sub(base.heap_blks_hit)?,
            idx_blks_read: self.idx_blks_read.checked_sub(base.idx_blks_read)?,
            idx_blks_hit: self.idx_blks_hit.checked_sub(base.idx_blks_hit)?,
        })
    }
}
