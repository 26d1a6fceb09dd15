//! Scripted in-memory source for tests and demos.

use std::collections::VecDeque;

use chrono::{DateTime, Duration, TimeZone, Utc};

use crate::model::{CounterRow, Snapshot};

use super::{CollectError, SnapshotSource};

/// Replays a fixed script of collection results.
///
/// Each `collect` pops the next step; once the script is exhausted the last
/// successful rows are returned again, as an idle server would. Capture
/// times advance by one second per call from a fixed epoch so tests are
/// deterministic.
pub struct MockSource<R> {
    script: VecDeque<Result<Vec<R>, CollectError>>,
    last: Vec<R>,
    clock: DateTime<Utc>,
    calls: usize,
}

impl<R: CounterRow> MockSource<R> {
    /// Source returning each of `steps` in turn.
    pub fn new(steps: Vec<Vec<R>>) -> Self {
        Self::scripted(steps.into_iter().map(Ok).collect())
    }

    /// Source whose steps may also be failures.
    pub fn scripted(steps: Vec<Result<Vec<R>, CollectError>>) -> Self {
        Self {
            script: steps.into(),
            last: Vec::new(),
            clock: Utc
                .timestamp_opt(1_700_000_000, 0)
                .single()
                .unwrap_or_default(),
            calls: 0,
        }
    }

    /// Appends a step to the end of the script.
    pub fn push(&mut self, step: Result<Vec<R>, CollectError>) {
        self.script.push_back(step);
    }

    /// Number of `collect` calls so far.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl<R: CounterRow> SnapshotSource<R> for MockSource<R> {
    fn collect(&mut self) -> Result<Snapshot<R>, CollectError> {
        self.calls += 1;
        self.clock += Duration::seconds(1);
        if let Some(step) = self.script.pop_front() {
            self.last = step?;
        }
        Ok(Snapshot::new(self.last.clone(), self.clock))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testing::row;

    #[test]
    fn replays_steps_then_repeats_last() {
        let mut s = MockSource::new(vec![vec![row("a", 1)], vec![row("a", 2)]]);
        assert_eq!(s.collect().unwrap().rows[0].count, 1);
        assert_eq!(s.collect().unwrap().rows[0].count, 2);
        assert_eq!(s.collect().unwrap().rows[0].count, 2);
        assert_eq!(s.calls(), 3);
    }

    #[test]
    fn failures_are_returned_once() {
        let mut s = MockSource::scripted(vec![
            Ok(vec![row("a", 1)]),
            Err(CollectError::Query("boom".to_string())),
        ]);
        assert!(s.collect().is_ok());
        assert_eq!(
            s.collect().unwrap_err(),
            CollectError::Query("boom".to_string())
        );
        assert_eq!(s.collect().unwrap().rows[0].count, 1);
    }

    #[test]
    fn capture_time_advances() {
        let mut s = MockSource::new(vec![vec![row("a", 1)]]);
        let t1 = s.collect().unwrap().collected_at.unwrap();
        let t2 = s.collect().unwrap().collected_at.unwrap();
        assert!(t2 > t1);
    }
}
