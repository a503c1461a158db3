//! Countdown core module
//!
//! Duration parsing, target-instant resolution and the per-tick remaining
//! time computation. Nothing here touches the terminal.

pub mod clock;
pub mod duration;
pub mod target;

// Re-export main types
pub use clock::{tick, RemainingTime, Tick};
pub use duration::{parse_duration, TimerDuration, DEFAULT_DURATION_SECS};
pub use target::{next_instant, next_occurrence, parse_time_of_day, resolve_target, TargetInstant, TargetSource};
