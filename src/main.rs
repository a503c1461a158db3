//! Retro Countdown - an 80s-style countdown timer for the terminal
//!
//! This is the main entry point for the retro-countdown application.

use chrono::Local;
use tracing::info;

use retro_countdown::{
    config::Config,
    countdown::resolve_target,
    render::build_renderer,
    tasks::countdown_task,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout only carries frames
    tracing_subscriber::fmt()
        .with_env_filter(format!("retro_countdown={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting retro-countdown v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: style={:?}, interval={}ms, fullscreen={}",
          config.style, config.interval().as_millis(), config.fullscreen);

    let target = resolve_target(config.time.as_deref(), config.duration.as_deref(), Local::now())?;
    let settings = config.loop_settings();

    // Dropping the renderer restores the terminal
    let mut renderer = build_renderer(config.style, config.fullscreen)?;

    tokio::select! {
        result = countdown_task(&target, renderer.as_mut(), &settings) => {
            result?;
        }
        result = shutdown_signal() => {
            result?;
            info!("Countdown stopped by user");
        }
    }

    drop(renderer);
    info!("Shutdown complete");
    Ok(())
}
