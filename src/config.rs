//! Configuration and CLI argument handling

use std::time::Duration;

use clap::Parser;

use crate::{
    render::{Style, DEFAULT_FINISHED_MESSAGE, DEFAULT_MESSAGE},
    state::DEFAULT_CYCLE_PERIOD,
    tasks::LoopSettings,
};

/// Shortest refresh interval accepted on the command line
const MIN_INTERVAL_MS: u64 = 10;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "retro-countdown")]
#[command(about = "Terminal-based retro countdown timer")]
#[command(version)]
pub struct Config {
    /// Target time in format HH:MM:SS or HH:MM
    #[arg(short, long, conflicts_with = "duration")]
    pub time: Option<String>,

    /// Duration for countdown. Formats: minutes (5), decimal minutes (5.5), MM:SS (5:30), or HH:MM:SS (1:30:45)
    #[arg(short, long)]
    pub duration: Option<String>,

    /// Display style
    #[arg(short, long, value_enum, default_value_t = Style::Ascii)]
    pub style: Style,

    /// Use the whole terminal and hide the cursor
    #[arg(long)]
    pub fullscreen: bool,

    /// Refresh interval in milliseconds
    #[arg(long, default_value = "100")]
    pub interval_ms: u64,

    /// Headline shown while counting down
    #[arg(long, default_value = DEFAULT_MESSAGE)]
    pub message: String,

    /// Message shown once the countdown is over
    #[arg(long, default_value = DEFAULT_FINISHED_MESSAGE)]
    pub finished_message: String,

    /// Exit once the countdown reaches zero
    #[arg(long)]
    pub exit_on_expiry: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Refresh interval, clamped to a sane minimum
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(MIN_INTERVAL_MS))
    }

    /// Settings for the countdown task
    pub fn loop_settings(&self) -> LoopSettings {
        LoopSettings {
            interval: self.interval(),
            color_period: DEFAULT_CYCLE_PERIOD,
            message: self.message.clone(),
            finished_message: self.finished_message.clone(),
            exit_on_expiry: self.exit_on_expiry,
        }
    }
}
