//! Table Operations and Table I/O columns.

use crate::fmt::{format_blocks, format_count, format_hit_ratio, format_pct};
use crate::model::{CounterRow, TableIoRow, TableOpsRow};

use super::{Columns, View};

impl Columns for TableOpsRow {
    const VIEW: View = View::TableOps;
    const SOURCE: &'static str = "pg_stat_user_tables";

    fn headings() -> String {
        format!(
            "{:>10} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {}",
            "Ops", "%", "SeqScan", "SeqRead", "IdxScan", "Insert", "Update", "Delete", "Table"
        )
    }

    fn content(&self, totals: &Self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {}",
            format_count(self.primary(), 10),
            format_pct(self.primary(), totals.primary(), 6),
            format_count(self.seq_scan, 10),
            format_count(self.seq_tup_read, 10),
            format_count(self.idx_scan, 10),
            format_count(self.n_tup_ins, 10),
            format_count(self.n_tup_upd, 10),
            format_count(self.n_tup_del, 10),
            self.name
        )
    }
}

impl Columns for TableIoRow {
    const VIEW: View = View::TableIo;
    const SOURCE: &'static str = "pg_statio_user_tables";

    fn headings() -> String {
        format!(
            "{:>10} {:>6} {:>10} {:>10} {:>10} {:>10} {:>6} {}",
            "Blocks", "%", "HeapRead", "HeapHit", "IdxRead", "IdxHit", "Hit%", "Table"
        )
    }

    fn content(&self, totals: &Self) -> String {
        format!(
            "{} {} {} {} {} {} {} {}",
            format_blocks(self.primary(), 10),
            format_pct(self.primary(), totals.primary(), 6),
            format_blocks(self.heap_blks_read, 10),
            format_blocks(self.heap_blks_hit, 10),
            format_blocks(self.idx_blks_read, 10),
            format_blocks(self.idx_blks_hit, 10),
            format_hit_ratio(self.blks_hit(), self.blks_read(), 6),
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_io_shows_hit_ratio() {
        let row = TableIoRow {
            name: "public.orders".to_string(),
            heap_blks_read: 1,
            heap_blks_hit: 99,
            ..TableIoRow::default()
        };
        let line = row.content(&row);
        assert!(line.contains(" 99.0%"));
        assert!(line.contains("100.0%"));
        assert!(line.ends_with("public.orders"));
    }

    #[test]
    fn table_ops_share_of_totals() {
        let row = TableOpsRow {
            name: "public.a".to_string(),
            seq_scan: 1,
            ..TableOpsRow::default()
        };
        let totals = TableOpsRow {
            seq_scan: 4,
            ..TableOpsRow::default()
        };
        assert!(row.content(&totals).contains(" 25.0%"));
    }
}
