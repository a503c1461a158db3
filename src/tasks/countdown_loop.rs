//! Countdown refresh task

use std::time::{Duration, Instant};

use chrono::Local;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

use crate::{
    countdown::{tick, TargetInstant},
    render::{Frame, Renderer, DEFAULT_FINISHED_MESSAGE, DEFAULT_MESSAGE},
    state::{blink_on, ClockState, ColorCycle, DEFAULT_CYCLE_PERIOD},
};

/// Settings for the refresh loop
#[derive(Debug, Clone)]
pub struct LoopSettings {
    /// Time between refreshes
    pub interval: Duration,
    /// How long each accent color is shown
    pub color_period: Duration,
    pub message: String,
    pub finished_message: String,
    /// Return after the first expired frame instead of running until interrupted
    pub exit_on_expiry: bool,
}

impl Default for LoopSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_millis(100),
            color_period: DEFAULT_CYCLE_PERIOD,
            message: DEFAULT_MESSAGE.to_string(),
            finished_message: DEFAULT_FINISHED_MESSAGE.to_string(),
            exit_on_expiry: false,
        }
    }
}

/// Recompute the remaining time on every interval tick and hand it to the renderer.
///
/// Runs until the future is dropped, or until the countdown expires when
/// `exit_on_expiry` is set. Render errors end the task.
pub async fn countdown_task<R>(
    target: &TargetInstant,
    renderer: &mut R,
    settings: &LoopSettings,
) -> std::io::Result<()>
where
    R: Renderer + ?Sized,
{
    info!("Starting countdown task");

    let mut interval = tokio::time::interval(settings.interval);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    let mut colors = ColorCycle::new(renderer.palette_len(), settings.color_period, Instant::now());
    let mut state = ClockState::new();

    loop {
        interval.tick().await;

        let now = Local::now();
        let current = tick(target, now);
        let accent = colors.advance(Instant::now());

        if state.observe(&current) {
            info!("Countdown expired");
        }

        let frame = Frame {
            tick: current,
            target,
            now,
            accent,
            blink_on: blink_on(now),
            message: &settings.message,
            finished_message: &settings.finished_message,
        };
        renderer.render(&frame)?;

        if state.is_expired() && settings.exit_on_expiry {
            debug!("Exiting after expiry");
            return Ok(());
        }
    }
}
