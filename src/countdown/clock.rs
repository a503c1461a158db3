//! Countdown clock: remaining-time computation for one tick

use std::fmt;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::target::TargetInstant;

/// Remaining time, truncated to whole seconds and split into components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RemainingTime {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl RemainingTime {
    /// Decompose a non-negative number of whole seconds
    pub fn from_total_seconds(total: u64) -> Self {
        let hours = total / 3600;
        let remainder = total % 3600;
        Self {
            hours,
            minutes: (remainder / 60) as u8,
            seconds: (remainder % 60) as u8,
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.hours * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }
}

/// Formats as `HH:MM:SS`; hours widen past two digits when needed
impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Result of one clock tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tick {
    pub remaining: RemainingTime,
    pub expired: bool,
}

/// Compute the remaining time until `target` as seen at `now`.
///
/// Pure: the same pair always yields the same tick. Once `now` reaches the
/// target the tick is expired with all components at zero.
pub fn tick(target: &TargetInstant, now: DateTime<Local>) -> Tick {
    let delta = target.at().signed_duration_since(now);
    let expired = delta <= chrono::TimeDelta::zero();
    let total = if expired { 0 } else { delta.num_seconds().max(0) as u64 };

    Tick {
        remaining: RemainingTime::from_total_seconds(total),
        expired,
    }
}
