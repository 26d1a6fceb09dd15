//! Baseline capture and upstream reset detection.

use crate::model::{CounterRow, Snapshot};

/// Outcome of comparing the baseline with a new current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaselineDecision {
    /// Baseline is still valid.
    Keep,
    /// First non-empty collection, baseline captured.
    Initial,
    /// Baseline totals exceeded current totals, baseline recaptured.
    CounterReset,
}

impl BaselineDecision {
    /// Decides whether `baseline` must be recaptured from `current`.
    ///
    /// Counters only grow between resets, so a drop in the summed primary
    /// field means the server restarted or statistics were reset.
    pub fn evaluate<R: CounterRow>(baseline: &Snapshot<R>, current: &Snapshot<R>) -> Self {
        if baseline.is_empty() && !current.is_empty() {
            return Self::Initial;
        }
        if baseline.totals().primary() > current.totals().primary() {
            return Self::CounterReset;
        }
        Self::Keep
    }
}

/// Owns the baseline ("first") and current ("last") snapshots of a domain.
#[derive(Debug)]
pub struct BaselineManager<R> {
    baseline: Snapshot<R>,
    current: Snapshot<R>,
}

impl<R> Default for BaselineManager<R> {
    fn default() -> Self {
        Self {
            baseline: Snapshot::default(),
            current: Snapshot::default(),
        }
    }
}

impl<R: CounterRow> BaselineManager<R> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn baseline(&self) -> &Snapshot<R> {
        &self.baseline
    }

    pub fn current(&self) -> &Snapshot<R> {
        &self.current
    }

    /// Replaces the current snapshot and recaptures the baseline if needed.
    pub fn observe(&mut self, current: Snapshot<R>) -> BaselineDecision {
        self.current = current;
        let decision = BaselineDecision::evaluate(&self.baseline, &self.current);
        if decision != BaselineDecision::Keep {
            self.capture();
        }
        decision
    }

    /// Copies current into baseline, capture time included.
    pub fn capture(&mut self) {
        self.baseline = self.current.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::{TestRow, row};
    use chrono::{TimeZone, Utc};

    fn snap(secs: i64, rows: Vec<TestRow>) -> Snapshot<TestRow> {
        Snapshot::new(rows, Utc.timestamp_opt(secs, 0).unwrap())
    }

    #[test]
    fn first_non_empty_collection_captures_baseline() {
        let mut m = BaselineManager::new();
        let d = m.observe(snap(100, vec![row("a", 1)]));
        assert_eq!(d, BaselineDecision::Initial);
        assert_eq!(m.baseline(), m.current());
    }

    #[test]
    fn empty_collection_leaves_baseline_empty() {
        let mut m: BaselineManager<TestRow> = BaselineManager::new();
        assert_eq!(m.observe(snap(100, vec![])), BaselineDecision::Keep);
        assert!(m.baseline().collected_at.is_none());
    }

    #[test]
    fn growing_counters_keep_baseline() {
        let mut m = BaselineManager::new();
        m.observe(snap(100, vec![row("a", 100)]));
        let d = m.observe(snap(110, vec![row("a", 130)]));
        assert_eq!(d, BaselineDecision::Keep);
        assert_eq!(m.baseline().rows[0].count, 100);
        assert_eq!(m.current().rows[0].count, 130);
    }

    #[test]
    fn totals_regression_recaptures_baseline() {
        let mut m = BaselineManager::new();
        m.observe(snap(100, vec![row("a", 120), row("b", 80)]));
        let d = m.observe(snap(110, vec![row("a", 100), row("b", 50)]));
        assert_eq!(d, BaselineDecision::CounterReset);
        assert_eq!(m.baseline().totals().count, 150);
        assert_eq!(
            m.baseline().collected_at,
            Some(Utc.timestamp_opt(110, 0).unwrap())
        );
    }

    #[test]
    fn single_row_regression_without_total_drop_is_not_a_reset() {
        let mut m = BaselineManager::new();
        m.observe(snap(100, vec![row("c", 40), row("d", 10)]));
        let d = m.observe(snap(110, vec![row("c", 10), row("d", 100)]));
        assert_eq!(d, BaselineDecision::Keep);
    }

    #[test]
    fn capture_forces_baseline_from_current() {
        let mut m = BaselineManager::new();
        m.observe(snap(100, vec![row("a", 10)]));
        m.observe(snap(110, vec![row("a", 20)]));
        m.capture();
        assert_eq!(m.baseline().rows[0].count, 20);
        assert_eq!(
            m.baseline().collected_at,
            Some(Utc.timestamp_opt(110, 0).unwrap())
        );
    }
}
