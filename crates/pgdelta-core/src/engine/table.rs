//! Metric table: baseline manager plus delta engine over one snapshot source.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::collector::{CollectError, SnapshotSource};
use crate::model::{CounterRow, Snapshot};

use super::baseline::{BaselineDecision, BaselineManager};
use super::delta::derive_results;

/// Baseline, current and results snapshots of one domain.
pub struct MetricTable<R, S> {
    source: S,
    snapshots: BaselineManager<R>,
    results: Snapshot<R>,
    totals: R,
    underflowed: Vec<String>,
    want_relative: bool,
}

impl<R: CounterRow, S: SnapshotSource<R>> MetricTable<R, S> {
    pub fn new(source: S, want_relative: bool) -> Self {
        Self {
            source,
            snapshots: BaselineManager::new(),
            results: Snapshot::default(),
            totals: crate::model::totals(&[]),
            underflowed: Vec::new(),
            want_relative,
        }
    }

    /// Collects a new current snapshot and recomputes results.
    ///
    /// On error nothing changes, so the last good results stay displayable.
    pub fn collect(&mut self) -> Result<(), CollectError> {
        let current = self.source.collect()?;

        match self.snapshots.observe(current) {
            BaselineDecision::Keep => {}
            BaselineDecision::Initial => {
                debug!(rows = self.snapshots.current().len(), "baseline captured");
            }
            BaselineDecision::CounterReset => {
                info!(
                    rows = self.snapshots.current().len(),
                    "counters went backwards, baseline recaptured"
                );
            }
        }

        self.recompute();
        Ok(())
    }

    /// Makes the latest collection the new baseline.
    pub fn set_first_from_last(&mut self) {
        self.snapshots.capture();
        info!(rows = self.snapshots.baseline().len(), "baseline reset by user");
        self.recompute();
    }

    /// Row count in results, zero rows included.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    pub fn want_relative_stats(&self) -> bool {
        self.want_relative
    }

    /// Takes effect on the next [`collect`](Self::collect).
    pub fn set_want_relative_stats(&mut self, want_relative: bool) {
        self.want_relative = want_relative;
    }

    /// Capture time of the baseline.
    pub fn first_collect_time(&self) -> Option<DateTime<Utc>> {
        self.snapshots.baseline().collected_at
    }

    /// Capture time of the latest collection.
    pub fn last_collect_time(&self) -> Option<DateTime<Utc>> {
        self.snapshots.current().collected_at
    }

    pub fn results(&self) -> &[R] {
        &self.results.rows
    }

    pub fn totals(&self) -> &R {
        &self.totals
    }

    /// Rows left unsubtracted in the last computation.
    pub fn underflowed(&self) -> &[String] {
        &self.underflowed
    }

    fn recompute(&mut self) {
        let delta = derive_results(
            self.snapshots.current(),
            self.snapshots.baseline(),
            self.want_relative,
        );
        self.results = delta.results;
        self.totals = delta.totals;
        self.underflowed = delta.underflowed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::MockSource;
    use crate::model::testing::{TestRow, row};

    fn table(steps: Vec<Vec<TestRow>>, relative: bool) -> MetricTable<TestRow, MockSource<TestRow>> {
        MetricTable::new(MockSource::new(steps), relative)
    }

    fn counts(t: &MetricTable<TestRow, MockSource<TestRow>>) -> Vec<(String, u64)> {
        t.results()
            .iter()
            .map(|r| (r.name.clone(), r.count))
            .collect()
    }

    #[test]
    fn empty_before_first_collect() {
        let t = table(vec![], true);
        assert!(t.is_empty());
        assert_eq!(t.totals().count, 0);
        assert!(t.first_collect_time().is_none());
        assert!(t.last_collect_time().is_none());
    }

    #[test]
    fn first_collect_in_relative_mode_is_all_zero() {
        let mut t = table(vec![vec![row("a", 100), row("b", 50)]], true);
        t.collect().unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.totals().count, 0);
        assert_eq!(t.first_collect_time(), t.last_collect_time());
    }

    #[test]
    fn relative_results_after_second_collect() {
        let mut t = table(
            vec![
                vec![row("A", 100), row("B", 50)],
                vec![row("A", 130), row("B", 70)],
            ],
            true,
        );
        t.collect().unwrap();
        t.collect().unwrap();
        assert_eq!(
            counts(&t),
            vec![("A".to_string(), 30), ("B".to_string(), 20)]
        );
        assert_eq!(t.totals().count, 50);
        assert!(t.first_collect_time() < t.last_collect_time());
    }

    #[test]
    fn collect_is_idempotent_for_unchanged_source() {
        let mut t = table(
            vec![vec![row("a", 10), row("b", 10)], vec![row("a", 15), row("b", 12)]],
            true,
        );
        t.collect().unwrap();
        t.collect().unwrap();
        let first = (t.results().to_vec(), t.totals().clone());
        // Script exhausted, source keeps returning the same rows.
        t.collect().unwrap();
        assert_eq!(first, (t.results().to_vec(), t.totals().clone()));
    }

    #[test]
    fn counter_reset_recaptures_baseline_and_never_goes_negative() {
        let mut t = table(
            vec![
                vec![row("a", 120), row("b", 80)],
                vec![row("a", 100), row("b", 50)],
                vec![row("a", 110), row("b", 55)],
            ],
            true,
        );
        t.collect().unwrap();
        t.collect().unwrap();
        // Baseline is now the post-reset snapshot: zero delta.
        assert_eq!(
            counts(&t),
            vec![("a".to_string(), 0), ("b".to_string(), 0)]
        );
        assert_eq!(t.first_collect_time(), t.last_collect_time());

        t.collect().unwrap();
        assert_eq!(
            counts(&t),
            vec![("a".to_string(), 10), ("b".to_string(), 5)]
        );
    }

    #[test]
    fn row_level_underflow_shows_raw_value() {
        let mut t = table(
            vec![
                vec![row("C", 40), row("D", 10)],
                vec![row("C", 10), row("D", 100)],
            ],
            true,
        );
        t.collect().unwrap();
        t.collect().unwrap();
        assert_eq!(
            counts(&t),
            vec![("D".to_string(), 90), ("C".to_string(), 10)]
        );
        assert_eq!(t.underflowed(), ["C".to_string()]);
    }

    #[test]
    fn toggling_relative_mode_waits_for_next_collect() {
        let mut t = table(vec![vec![row("a", 100)], vec![row("a", 130)]], true);
        t.collect().unwrap();
        t.collect().unwrap();
        assert_eq!(t.results()[0].count, 30);

        t.set_want_relative_stats(false);
        assert!(!t.want_relative_stats());
        assert_eq!(t.results()[0].count, 30);

        t.collect().unwrap();
        assert_eq!(t.results()[0].count, 130);

        t.set_want_relative_stats(true);
        assert_eq!(t.results()[0].count, 130);
        t.collect().unwrap();
        assert_eq!(t.results()[0].count, 30);
    }

    #[test]
    fn set_first_from_last_zeroes_results_immediately() {
        let mut t = table(vec![vec![row("a", 100)], vec![row("a", 130)]], true);
        t.collect().unwrap();
        t.collect().unwrap();
        t.set_first_from_last();
        assert_eq!(t.results()[0].count, 0);
        assert_eq!(t.totals().count, 0);
        assert_eq!(t.first_collect_time(), t.last_collect_time());
    }

    #[test]
    fn failed_collect_keeps_last_results() {
        let mut t = MetricTable::new(
            MockSource::scripted(vec![
                Ok(vec![row("a", 100)]),
                Ok(vec![row("a", 130)]),
                Err(CollectError::Connection("connection refused".to_string())),
            ]),
            true,
        );
        t.collect().unwrap();
        t.collect().unwrap();
        let before = t.last_collect_time();
        assert!(t.collect().unwrap_err().is_connection());
        assert_eq!(t.results()[0].count, 30);
        assert_eq!(t.last_collect_time(), before);
    }

    #[test]
    fn zero_rows_count_towards_len() {
        let mut t = table(vec![vec![row("a", 5), row("b", 0)]], false);
        t.collect().unwrap();
        assert_eq!(t.len(), 2);
        assert_eq!(t.totals().count, 5);
    }
}
