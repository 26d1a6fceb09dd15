//! Relative/absolute result derivation, ordering and totals.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::warn;

use crate::model::{CounterRow, Snapshot};

/// Output of one derivation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Delta<R> {
    /// Sorted rows to display. Carries the current snapshot's capture time.
    pub results: Snapshot<R>,
    /// Field-wise sum of `results`.
    pub totals: R,
    /// Rows left unsubtracted because a baseline field exceeded the current one.
    pub underflowed: Vec<String>,
}

/// Derives results from `current` and `baseline`.
///
/// With `relative` off the rows are copied as-is. With it on, each row is
/// replaced by `current - baseline` when a baseline row of the same name
/// exists and no field would go negative. New rows and underflowing rows
/// keep their raw values.
pub fn derive_results<R: CounterRow>(
    current: &Snapshot<R>,
    baseline: &Snapshot<R>,
    relative: bool,
) -> Delta<R> {
    let mut underflowed = Vec::new();

    let mut rows: Vec<R> = if relative {
        let by_name: HashMap<&str, &R> = baseline.rows.iter().map(|r| (r.name(), r)).collect();

        current
            .rows
            .iter()
            .map(|row| {
                let Some(base) = by_name.get(row.name()) else {
                    return row.clone();
                };
                match row.checked_sub(base) {
                    Some(d) => d,
                    None => {
                        warn!(
                            row = row.name(),
                            current = row.primary(),
                            baseline = base.primary(),
                            "counter below baseline without a table-level reset, showing raw value"
                        );
                        underflowed.push(row.name().to_string());
                        row.clone()
                    }
                }
            })
            .collect()
    } else {
        current.rows.clone()
    };

    sort_rows(&mut rows);

    let results = Snapshot {
        rows,
        collected_at: current.collected_at,
    };
    let totals = results.totals();

    Delta {
        results,
        totals,
        underflowed,
    }
}

/// Sorts by primary field descending, then name ascending.
pub fn sort_rows<R: CounterRow>(rows: &mut [R]) {
    rows.sort_by(|a, b| match b.primary().cmp(&a.primary()) {
        Ordering::Equal => a.name().cmp(b.name()),
        other => other,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TOTALS_NAME;
    use crate::model::testing::{TestRow, row};
    use chrono::{TimeZone, Utc};

    fn snap(secs: i64, rows: Vec<TestRow>) -> Snapshot<TestRow> {
        Snapshot::new(rows, Utc.timestamp_opt(secs, 0).unwrap())
    }

    fn names(d: &Delta<TestRow>) -> Vec<(&str, u64)> {
        d.results
            .rows
            .iter()
            .map(|r| (r.name.as_str(), r.count))
            .collect()
    }

    #[test]
    fn absolute_mode_copies_current() {
        let base = snap(0, vec![row("a", 100)]);
        let cur = snap(10, vec![row("a", 130), row("b", 5)]);
        let d = derive_results(&cur, &base, false);
        assert_eq!(names(&d), vec![("a", 130), ("b", 5)]);
        assert_eq!(d.totals.count, 135);
        assert_eq!(d.results.collected_at, cur.collected_at);
    }

    #[test]
    fn relative_mode_subtracts_baseline() {
        let base = snap(0, vec![row("A", 100), row("B", 50)]);
        let cur = snap(10, vec![row("A", 130), row("B", 70)]);
        let d = derive_results(&cur, &base, true);
        assert_eq!(names(&d), vec![("A", 30), ("B", 20)]);
        assert_eq!(d.totals.name, TOTALS_NAME);
        assert_eq!(d.totals.count, 50);
        assert!(d.underflowed.is_empty());
    }

    #[test]
    fn new_rows_are_left_unsubtracted() {
        let base = snap(0, vec![row("a", 100)]);
        let cur = snap(10, vec![row("a", 110), row("fresh", 7)]);
        let d = derive_results(&cur, &base, true);
        assert_eq!(names(&d), vec![("a", 10), ("fresh", 7)]);
    }

    #[test]
    fn underflowing_row_keeps_raw_value_and_is_reported() {
        let base = snap(0, vec![row("C", 40), row("D", 10)]);
        let cur = snap(10, vec![row("C", 10), row("D", 100)]);
        let d = derive_results(&cur, &base, true);
        assert_eq!(names(&d), vec![("D", 90), ("C", 10)]);
        assert_eq!(d.underflowed, vec!["C".to_string()]);
    }

    #[test]
    fn underflow_in_secondary_field_blocks_subtraction() {
        let mut b = row("x", 10);
        b.extra = 5;
        let mut c = row("x", 20);
        c.extra = 1;
        let d = derive_results(&snap(10, vec![c]), &snap(0, vec![b]), true);
        assert_eq!(d.results.rows[0].count, 20);
        assert_eq!(d.results.rows[0].extra, 1);
    }

    #[test]
    fn sort_breaks_ties_by_name() {
        let mut rows = vec![row("b", 10), row("a", 10), row("z", 20)];
        sort_rows(&mut rows);
        let order: Vec<(&str, u64)> = rows.iter().map(|r| (r.name.as_str(), r.count)).collect();
        assert_eq!(order, vec![("z", 20), ("a", 10), ("b", 10)]);
    }

    #[test]
    fn zero_rows_are_kept() {
        let cur = snap(10, vec![row("idle", 0), row("busy", 3)]);
        let d = derive_results(&cur, &Snapshot::default(), true);
        assert_eq!(d.results.len(), 2);
        assert_eq!(d.results.rows[1].name, "idle");
    }

    #[test]
    fn empty_current_yields_zero_totals() {
        let d: Delta<TestRow> = derive_results(&Snapshot::default(), &Snapshot::default(), true);
        assert!(d.results.is_empty());
        assert_eq!(d.totals.count, 0);
        assert_eq!(d.totals.name, TOTALS_NAME);
    }
}
