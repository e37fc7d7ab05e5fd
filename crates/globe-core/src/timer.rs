//! Host-pumped fixed-rate interval.
//!
//! Owning an [`Interval`] is owning the schedule: dropping it cancels every
//! future tick, so a stopped session has nothing left that can fire.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period: Duration,
    next_due: Instant,
    max_catch_up: u32,
}

impl Interval {
    /// First tick is due one `period` after `now`.
    pub fn new(period: Duration, now: Instant, max_catch_up: u32) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
            max_catch_up: max_catch_up.max(1),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    /// Number of ticks due at `now`, at most `max_catch_up`.
    ///
    /// A backlog beyond the cap is dropped and the schedule restarts from
    /// `now`.
    pub fn due(&mut self, now: Instant) -> u32 {
        if now < self.next_due {
            return 0;
        }
        let behind = now.duration_since(self.next_due).as_nanos() / self.period.as_nanos();
        let due = u32::try_from(behind.saturating_add(1)).unwrap_or(u32::MAX);
        if due > self.max_catch_up {
            self.next_due = now + self.period;
            return self.max_catch_up;
        }
        self.next_due += self.period * due;
        due
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_at_the_period() {
        let start = Instant::now();
        let period = Duration::from_millis(100);
        let mut interval = Interval::new(period, start, 4);
        assert_eq!(interval.due(start), 0);
        assert_eq!(interval.due(start + Duration::from_millis(99)), 0);
        assert_eq!(interval.due(start + Duration::from_millis(100)), 1);
        assert_eq!(interval.due(start + Duration::from_millis(150)), 0);
        assert_eq!(interval.due(start + Duration::from_millis(310)), 2);
    }

    #[test]
    fn backlog_is_capped() {
        let start = Instant::now();
        let mut interval = Interval::new(Duration::from_millis(10), start, 4);
        let late = start + Duration::from_secs(5);
        assert_eq!(interval.due(late), 4);
        assert_eq!(interval.next_due(), late + Duration::from_millis(10));
    }
}
