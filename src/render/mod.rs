//! Rendering module
//!
//! Each renderer turns a [`Frame`] into output. The host loop owns all
//! changing display state and passes it in through the frame.

pub mod ascii;
pub mod json;
pub mod segment;
pub mod terminal;

use std::io::{self, Stdout};

use chrono::{DateTime, Local};
use clap::ValueEnum;

use crate::countdown::{TargetInstant, Tick};

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use segment::SegmentRenderer;
pub use terminal::Screen;

/// Headline shown while counting down
pub const DEFAULT_MESSAGE: &str = "The livestream starts in";
/// Message shown once the countdown has expired
pub const DEFAULT_FINISHED_MESSAGE: &str = "The livestream has started!";

/// Everything a renderer needs for one refresh
#[derive(Debug, Clone)]
pub struct Frame<'a> {
    pub tick: Tick,
    pub target: &'a TargetInstant,
    pub now: DateTime<Local>,
    /// Index into the renderer's palette
    pub accent: usize,
    pub blink_on: bool,
    pub message: &'a str,
    pub finished_message: &'a str,
}

pub trait Renderer {
    /// Number of accent colors the host loop should cycle through
    fn palette_len(&self) -> usize;

    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()>;
}

/// Output style selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Style {
    /// Block-letter banner and ASCII-art digits
    #[default]
    Ascii,
    /// Seven-segment digits with blinking colons
    Segment,
    /// One JSON object per tick
    Json,
}

/// Build the renderer for `style` writing to stdout
pub fn build_renderer(style: Style, fullscreen: bool) -> io::Result<Box<dyn Renderer>> {
    let renderer: Box<dyn Renderer> = match style {
        Style::Ascii => Box::new(AsciiRenderer::new(screen(fullscreen)?)),
        Style::Segment => Box::new(SegmentRenderer::new(screen(fullscreen)?)),
        Style::Json => Box::new(JsonRenderer::new(io::stdout())),
    };
    Ok(renderer)
}

fn screen(fullscreen: bool) -> io::Result<Screen<Stdout>> {
    Screen::new(io::stdout(), fullscreen)
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::countdown::{RemainingTime, TargetSource};

    pub fn target() -> TargetInstant {
        TargetInstant::new(Local::now(), TargetSource::Duration { seconds: 0.0 })
    }

    pub fn frame(target: &TargetInstant, total_seconds: u64, expired: bool) -> Frame<'_> {
        Frame {
            tick: Tick {
                remaining: RemainingTime::from_total_seconds(total_seconds),
                expired,
            },
            target,
            now: target.at(),
            accent: 0,
            blink_on: true,
            message: DEFAULT_MESSAGE,
            finished_message: DEFAULT_FINISHED_MESSAGE,
        }
    }
}
