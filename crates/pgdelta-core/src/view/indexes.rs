//! Index Usage columns.

use crate::fmt::{format_count, format_pct};
use crate::model::IndexUsageRow;

use super::{Columns, View};

impl Columns for IndexUsageRow {
    const VIEW: View = View::IndexUsage;
    const SOURCE: &'static str = "pg_stat_user_indexes";

    fn headings() -> String {
        format!(
            "{:>10} {:>6} {:>10} {:>10} {}",
            "Scans", "%", "TupRead", "TupFetch", "Index"
        )
    }

    fn content(&self, totals: &Self) -> String {
        format!(
            "{} {} {} {} {}",
            format_count(self.idx_scan, 10),
            format_pct(self.idx_scan, totals.idx_scan, 6),
            format_count(self.idx_tup_read, 10),
            format_count(self.idx_tup_fetch, 10),
            self.name
        )
    }
}
