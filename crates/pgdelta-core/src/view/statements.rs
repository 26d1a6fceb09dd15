//! Statement Latency and User Latency columns.

use crate::fmt::{
    format_blocks, format_count, format_hit_ratio, format_pct, format_time_us, normalize_for_display,
    truncate,
};
use crate::model::{StatementRow, UserRow};

use super::{Columns, View};

/// Longest query text shown in the name column.
const MAX_QUERY_LEN: usize = 200;

fn mean_us(exec_time_us: u64, calls: u64) -> u64 {
    exec_time_us.checked_div(calls).unwrap_or(0)
}

impl Columns for StatementRow {
    const VIEW: View = View::Statements;
    const SOURCE: &'static str = "pg_stat_statements";

    fn headings() -> String {
        format!(
            "{:>10} {:>6} {:>10} {:>10} {:>10} {:>6} {}",
            "Latency", "%", "Calls", "Mean", "Rows", "Hit%", "Query"
        )
    }

    fn content(&self, totals: &Self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            format_time_us(self.exec_time_us, 10),
            format_pct(self.exec_time_us, totals.exec_time_us, 6),
            format_count(self.calls, 10),
            format_time_us(mean_us(self.exec_time_us, self.calls), 10),
            format_count(self.rows, 10),
            format_hit_ratio(self.shared_blks_hit, self.shared_blks_read, 6),
            truncate(&normalize_for_display(&self.name), MAX_QUERY_LEN)
        )
    }
}

impl Columns for UserRow {
    const VIEW: View = View::Users;
    const SOURCE: &'static str = "pg_stat_statements";

    fn headings() -> String {
        format!(
            "{:>10} {:>6} {:>10} {:>10} {:>10} {:>10} {}",
            "Latency", "%", "Calls", "Mean", "Rows", "TempWrite", "User"
        )
    }

    fn content(&self, totals: &Self) -> String {
        format!(
            "{} {} {} {} {} {} {}",
            format_time_us(self.exec_time_us, 10),
            format_pct(self.exec_time_us, totals.exec_time_us, 6),
            format_count(self.calls, 10),
            format_time_us(mean_us(self.exec_time_us, self.calls), 10),
            format_count(self.rows, 10),
            format_blocks(self.temp_blks_written, 10),
            self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_latency_guards_zero_calls() {
        assert_eq!(mean_us(1_000, 0), 0);
        assert_eq!(mean_us(1_000, 4), 250);
    }

    #[test]
    fn long_queries_are_truncated() {
        let row = StatementRow {
            name: "x".repeat(500),
            calls: 1,
            exec_time_us: 10,
            ..StatementRow::default()
        };
        let line = row.content(&row);
        assert!(line.ends_with('…'));
        assert!(line.chars().count() < 300);
    }
}
