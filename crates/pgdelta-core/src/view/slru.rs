//! SLRU Caches columns.

use crate::fmt::{format_blocks, format_count, format_pct};
use crate::model::{CounterRow, SlruRow};

use super::{Columns, View};

impl Columns for SlruRow {
    const VIEW: View = View::Slru;
    const SOURCE: &'static str = "pg_stat_slru";

    fn headings() -> String {
        format!(
            "{:>10} {:>6} {:>10} {:>10} {:>10} {:>10} {:>10} {:>10} {}",
            "Blocks", "%", "Hit", "Read", "Zeroed", "Written", "Flushes", "Truncates", "SLRU"
        )
    }

    fn content(&self, totals: &Self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {}",
            format_blocks(self.primary(), 10),
            format_pct(self.primary(), totals.primary(), 6),
            format_blocks(self.blks_hit, 10),
            format_blocks(self.blks_read, 10),
            format_blocks(self.blks_zeroed, 10),
            format_blocks(self.blks_written, 10),
            format_count(self.flushes, 10),
            format_count(self.truncates, 10),
            self.name
        )
    }
}
