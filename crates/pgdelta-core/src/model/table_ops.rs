//! Per-table scan and write activity (`pg_stat_user_tables`).

use serde::Serialize;

use super::CounterRow;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TableOpsRow {
    /// `schema.table`
    pub name: String,
    pub seq_scan: u64,
    pub seq_tup_read: u64,
    pub idx_scan: u64,
    pub idx_tup_fetch: u64,
    pub n_tup_ins: u64,
    pub n_tup_upd: u64,
    pub n_tup_del: u64,
}

impl TableOpsRow {
    pub fn scans(&self) -> u64 {
        self.seq_scan.saturating_add(self.idx_scan)
    }

    pub fn writes(&self) -> u64 {
        self.n_tup_ins
            .saturating_add(self.n_tup_upd)
            .saturating_add(self.n_tup_del)
    }
}

impl CounterRow for TableOpsRow {
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
        self.scans().saturating_add(self.writes())
    }

    fn add(&mut self, other: &Self) {
        self.seq_scan = self.seq_scan.saturating_add(other.seq_scan);
        self.seq_tup_read = self.seq_tup_read.saturating_add(other.seq_tup_read);
        self.idx_scan = self.idx_scan.saturating_add(other.idx_scan);
        self.idx_tup_fetch = self.idx_tup_fetch.saturating_add(other.idx_tup_fetch);
        self.n_tup_ins = self.n_tup_ins.saturating_add(other.n_tup_ins);
        self.n_tup_upd = self.n_tup_upd.saturating_add(other.n_tup_upd);
        self.n_tup_del = self.n_tup_del.saturating_add(other.n_tup_del);
    }

    fn checked_sub(&self, base: &Self) -> Option<Self> {
        Some(Self {
            name: self.name.clone(),
            seq_scan: self.seq_scan.checked_sub(base.seq_scan)?,
            seq_tup_read: self.seq_tup_read.checked_sub(base.seq_tup_read)?,
            idx_scan: self.idx_scan.checked_sub(base.idx_scan)?,
            idx_tup_fetch: self.idx_tup_fetch.checked_sub(base.idx_tup_fetch)?,
            n_tup_ins: self.n_tup_ins.checked_sub(base.n_tup_ins)?,
            n_tup_upd: self.n_tup_upd.checked_sub(base.n_tup_upd)?,
            n_tup_del: self.n_tup_del.checked_sub(base.n_tup_del)?,
        })
    }
}
