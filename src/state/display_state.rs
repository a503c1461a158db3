//! Display state owned by the host loop: color cycling and blink phase

use std::time::{Duration, Instant};

use chrono::{DateTime, Local};

/// Seconds each accent color stays on screen
pub const DEFAULT_CYCLE_PERIOD: Duration = Duration::from_secs(2);

/// Rotates through a palette of `len` accent colors on a fixed period
#[derive(Debug, Clone)]
pub struct ColorCycle {
    len: usize,
    index: usize,
    period: Duration,
    last_change: Instant,
}

impl ColorCycle {
    /// Start at the first color. A zero-length palette is treated as one color.
    pub fn new(len: usize, period: Duration, now: Instant) -> Self {
        Self {
            len: len.max(1),
            index: 0,
            period,
            last_change: now,
        }
    }

    /// Move to the next color once more than `period` has passed since the last change
    pub fn advance(&mut self, now: Instant) -> usize {
        if now.saturating_duration_since(self.last_change) > self.period {
            self.index = (self.index + 1) % self.len;
            self.last_change = now;
        }
        self.index
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

/// Blink phase: on during even wall-clock seconds
pub fn blink_on(now: DateTime<Local>) -> bool {
    now.timestamp().rem_euclid(2) == 0
}
