//! Poll scheduling between collection cycles.

use std::time::{Duration, Instant};

/// Wait used when the schedule has slipped, so an overrun never turns into
/// a busy loop.
pub const GRACE_PERIOD: Duration = Duration::from_millis(200);

/// Shortest allowed poll interval.
pub const MIN_INTERVAL: Duration = Duration::from_secs(1);

/// Longest allowed poll interval.
pub const MAX_INTERVAL: Duration = Duration::from_secs(86_400);

/// Interval step for increase/decrease.
const INTERVAL_STEP: Duration = Duration::from_secs(1);

/// Tracks when the last collection happened and how long to wait for the
/// next one.
#[derive(Debug, Clone)]
pub struct PollScheduler {
    last_collected: Option<Instant>,
    interval: Duration,
}

impl PollScheduler {
    /// New scheduler; `interval` is clamped to
    /// [`MIN_INTERVAL`]..=[`MAX_INTERVAL`].
    pub fn new(interval: Duration) -> Self {
        Self {
            last_collected: None,
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    pub fn increase_interval(&mut self) {
        self.set_interval(self.interval.saturating_add(INTERVAL_STEP));
    }

    pub fn decrease_interval(&mut self) {
        self.set_interval(self.interval.saturating_sub(INTERVAL_STEP));
    }

    pub fn last_collected(&self) -> Option<Instant> {
        self.last_collected
    }

    pub fn mark_collected(&mut self) {
        self.mark_collected_at(Instant::now());
    }

    pub fn mark_collected_at(&mut self, at: Instant) {
        self.last_collected = Some(at);
    }

    /// Time until the next collection is due.
    pub fn time_to_wait(&self) -> Duration {
        self.time_to_wait_at(Instant::now())
    }

    /// Time until the next collection is due, as seen at `now`.
    ///
    /// Before the first collection nothing is due yet, so there is no wait.
    /// If the next collection time is already in the past the answer is
    /// [`GRACE_PERIOD`], never zero.
    pub fn time_to_wait_at(&self, now: Instant) -> Duration {
        let Some(last) = self.last_collected else {
            return Duration::ZERO;
        };
        let Some(next) = last.checked_add(self.interval) else {
            return self.interval;
        };
        if next < now {
            GRACE_PERIOD
        } else {
            next - now
        }
    }
}

impl Default for PollScheduler {
    fn default() -> Self {
        Self::new(MIN_INTERVAL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_remaining_part_of_interval() {
        let t = Instant::now();
        let mut s = PollScheduler::new(Duration::from_secs(5));
        s.mark_collected_at(t);
        assert_eq!(
            s.time_to_wait_at(t + Duration::from_secs(2)),
            Duration::from_secs(3)
        );
        assert_eq!(s.time_to_wait_at(t), Duration::from_secs(5));
    }

    #[test]
    fn overdue_schedule_waits_grace_period() {
        let t = Instant::now();
        let mut s = PollScheduler::new(Duration::from_secs(5));
        s.mark_collected_at(t);
        assert_eq!(s.time_to_wait_at(t + Duration::from_secs(10)), GRACE_PERIOD);
    }

    #[test]
    fn exactly_due_is_not_overdue() {
        let t = Instant::now();
        let mut s = PollScheduler::new(Duration::from_secs(5));
        s.mark_collected_at(t);
        assert_eq!(
            s.time_to_wait_at(t + Duration::from_secs(5)),
            Duration::ZERO
        );
    }

    #[test]
    fn nothing_to_wait_for_before_first_collection() {
        let s = PollScheduler::default();
        assert_eq!(s.time_to_wait(), Duration::ZERO);
        assert!(s.last_collected().is_none());
    }

    #[test]
    fn interval_is_clamped_to_minimum() {
        let mut s = PollScheduler::new(Duration::ZERO);
        assert_eq!(s.interval(), MIN_INTERVAL);

        s.decrease_interval();
        assert_eq!(s.interval(), MIN_INTERVAL);

        s.increase_interval();
        s.increase_interval();
        assert_eq!(s.interval(), Duration::from_secs(3));

        s.decrease_interval();
        assert_eq!(s.interval(), Duration::from_secs(2));

        s.set_interval(Duration::from_millis(10));
        assert_eq!(s.interval(), MIN_INTERVAL);
    }

    #[test]
    fn huge_interval_is_clamped_and_never_overflows() {
        let mut s = PollScheduler::new(Duration::from_secs(u64::MAX));
        assert_eq!(s.interval(), MAX_INTERVAL);
        s.mark_collected();
        assert!(s.time_to_wait() <= MAX_INTERVAL);

        s.set_interval(Duration::MAX);
        assert_eq!(s.interval(), MAX_INTERVAL);
        s.increase_interval();
        assert_eq!(s.interval(), MAX_INTERVAL);
        assert!(s.time_to_wait() <= MAX_INTERVAL);
    }
}
