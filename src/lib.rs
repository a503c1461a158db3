//! Retro Countdown - an 80s-style countdown timer for the terminal
//!
//! This library parses countdown targets, computes the remaining time on
//! each tick, and renders it as ASCII-art, seven-segment digits or JSON.

pub mod config;
pub mod countdown;
pub mod error;
pub mod render;
pub mod state;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use countdown::{parse_duration, resolve_target, tick, TargetInstant, Tick};
pub use error::CountdownError;
pub use tasks::countdown_task;
pub use utils::signals::shutdown_signal;
