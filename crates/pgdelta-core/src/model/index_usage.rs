//! Per-index usage (`pg_stat_user_indexes`).

use serde::Serialize;

use super::CounterRow;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct IndexUsageRow {
    /// `schema.index`
    pub name: String,
    pub idx_scan: u64,
    pub idx_tup_read: u64,
    pub idx_tup_fetch: u64,
}

impl CounterRow for IndexUsageRow {
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
        self.idx_scan
    }

    fn add(&mut self, other: &Self) {
        self.idx_scan = self.idx_scan.saturating_add(other.idx_scan);
        self.idx_tup_read = self.idx_tup_read.saturating_add(other.idx_tup_read);
        self.idx_tup_fetch = self.idx_tup_fetch.saturating_add(other.idx_tup_fetch);
    }

    fn checked_sub(&self, base: &Self) -> Option<Self> {
        Some(Self {
            name: self.name.clone(),
            idx_scan: self.idx_scan.checked_sub(base.idx_scan)?,
            idx_tup_read: self.idx_tup_read.checked_sub(base.idx_tup_read)?,
            idx_tup_fetch: self.idx_tup_fetch.checked_sub(base.idx_tup_fetch)?,
        })
    }
}
