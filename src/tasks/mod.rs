//! Background tasks module
//!
//! This module contains the refresh loop that drives the countdown display.

pub mod countdown_loop;

// Re-export main functions
pub use countdown_loop::{countdown_task, LoopSettings};
