//! Gravity deadline for the terminal loop.
//!
//! Times are plain milliseconds from any fixed start, so the timer can be driven by tests
//! without a clock.

#[derive(Debug, Clone)]
pub struct StepTimer {
    interval_ms: u64,
    deadline_ms: u64,
}

impl StepTimer {
    pub fn new(now_ms: u64, interval_ms: u64) -> Self {
        Self {
            interval_ms,
            deadline_ms: now_ms.saturating_add(interval_ms),
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Track the session's current interval. A different value re-arms the deadline from
    /// `now_ms`, so a level change applies to the very next step.
    pub fn set_interval(&mut self, now_ms: u64, interval_ms: u64) {
        if interval_ms == self.interval_ms {
            return;
        }
        self.interval_ms = interval_ms;
        self.deadline_ms = now_ms.saturating_add(interval_ms);
    }

    /// How long input polling may block before the next step is due.
    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        self.deadline_ms.saturating_sub(now_ms)
    }

    /// Whether a step is due. Firing re-arms the deadline one interval from `now_ms`.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        if now_ms < self.deadline_ms {
            return false;
        }
        self.deadline_ms = now_ms.saturating_add(self.interval_ms);
        true
    }
}
