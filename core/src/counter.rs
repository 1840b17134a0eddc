pub const COUNTER_DURATION_MS: f64 = 900.0;

pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CounterFrame {
    pub value: i64,
    pub finished: bool,
}

/// Values never decrease within a run.
#[derive(Clone, Debug, PartialEq)]
pub struct EasedCounter {
    start: i64,
    target: i64,
    duration_ms: f64,
    started_at_ms: f64,
    current: i64,
}

impl EasedCounter {
    pub fn new(target: i64, started_at_ms: f64) -> Self {
        Self::with_duration(target, COUNTER_DURATION_MS, started_at_ms)
    }

    pub fn with_duration(target: i64, duration_ms: f64, started_at_ms: f64) -> Self {
        Self {
            start: 0,
            target,
            duration_ms,
            started_at_ms,
            current: 0,
        }
    }

    pub fn current(&self) -> i64 {
        self.current
    }

    pub fn retarget(&mut self, target: i64, now_ms: f64) -> bool {
        if target == self.target {
            return false;
        }
        *self = Self::with_duration(target, self.duration_ms, now_ms);
        true
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.started_at_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn sample(&mut self, now_ms: f64) -> CounterFrame {
        let p = self.progress(now_ms);
        let span = (self.target - self.start) as f64;
        let value = (self.start as f64 + span * ease_out_cubic(p)).round() as i64;
        self.current = if self.target >= self.start {
            value.clamp(self.current, self.target)
        } else {
            value.clamp(self.target, self.current)
        };
        CounterFrame {
            value: self.current,
            finished: p >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero_and_lands_on_target() {
        let mut counter = EasedCounter::new(12, 1000.0);
        assert_eq!(counter.sample(1000.0).value, 0);
        let end = counter.sample(1900.0);
        assert_eq!(end.value, 12);
        assert!(end.finished);
        assert_eq!(counter.sample(5000.0).value, 12);
    }

    #[test]
    fn frames_never_decrease() {
        let mut counter = EasedCounter::new(12, 0.0);
        let mut last = 0;
        let mut now = 0.0;
        while now <= 1000.0 {
            let frame = counter.sample(now);
            assert!(frame.value >= last, "{} < {last} at {now}", frame.value);
            assert!(frame.value <= 12);
            last = frame.value;
            now += 16.7;
        }
        assert_eq!(last, 12);
    }

    #[test]
    fn stale_timestamps_do_not_move_backwards() {
        let mut counter = EasedCounter::new(18, 0.0);
        let ahead = counter.sample(450.0).value;
        assert_eq!(counter.sample(100.0).value, ahead);
    }

    #[test]
    fn halfway_is_ahead_of_linear() {
        let mut counter = EasedCounter::new(100, 0.0);
        assert_eq!(counter.sample(450.0).value, 88);
    }

    #[test]
    fn retarget_restarts_from_zero() {
        let mut counter = EasedCounter::new(4, 0.0);
        counter.sample(900.0);
        assert!(!counter.retarget(4, 1000.0));
        assert!(counter.retarget(2, 1000.0));
        assert_eq!(counter.sample(1000.0).value, 0);
        assert_eq!(counter.sample(1900.0).value, 2);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let mut counter = EasedCounter::with_duration(7, 0.0, 10.0);
        assert_eq!(counter.sample(10.0), CounterFrame { value: 7, finished: true });
    }
}
