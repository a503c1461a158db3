//! State management module
//!
//! This module contains the countdown's clock state and the renderer-facing
//! display state advanced by the host loop.

pub mod display_state;
pub mod timer_state;

// Re-export main types
pub use display_state::{blink_on, ColorCycle, DEFAULT_CYCLE_PERIOD};
pub use timer_state::ClockState;
