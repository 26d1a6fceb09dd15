//! Database Activity columns.

use crate::fmt::{format_blocks, format_count, format_hit_ratio, format_pct};
use crate::model::DatabaseRow;

use super::{Columns, View};

impl Columns for DatabaseRow {
    const VIEW: View = View::Databases;
    const SOURCE: &'static str = "pg_stat_database";

    fn headings() -> String {
        format!(
            "{:>10} {:>6} {:>10} {:>10} {:>10} {:>6} {:>10} {:>10} {}",
            "Xacts", "%", "Commit", "Rollback", "Read", "Hit%", "Returned", "Written", "Database"
        )
    }

    fn content(&self, totals: &Self) -> String {
        format!(
            "{} {} {} {} {} {} {} {} {}",
            format_count(self.transactions(), 10),
            format_pct(self.transactions(), totals.transactions(), 6),
            format_count(self.xact_commit, 10),
            format_count(self.xact_rollback, 10),
            format_blocks(self.blks_read, 10),
            format_hit_ratio(self.blks_hit, self.blks_read, 6),
            format_count(self.tup_returned, 10),
            format_count(self.tup_written, 10),
            self.name
        )
    }
}
