//! JSON lines output for scripts and status bars

use std::io::{self, Write};

use chrono::{DateTime, Local};
use serde::Serialize;

use super::{Frame, Renderer};
use crate::countdown::TargetSource;

/// One countdown snapshot
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot<'a> {
    pub timestamp: DateTime<Local>,
    pub target: DateTime<Local>,
    pub source: &'a TargetSource,
    pub remaining: String,
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
    pub total_seconds: u64,
    pub expired: bool,
    pub message: &'a str,
}

impl<'a> Snapshot<'a> {
    pub fn from_frame(frame: &Frame<'a>) -> Self {
        let remaining = frame.tick.remaining;
        Self {
            timestamp: frame.now,
            target: frame.target.at(),
            source: frame.target.source(),
            remaining: remaining.to_string(),
            hours: remaining.hours,
            minutes: remaining.minutes,
            seconds: remaining.seconds,
            total_seconds: remaining.total_seconds(),
            expired: frame.tick.expired,
            message: if frame.tick.expired { frame.finished_message } else { frame.message },
        }
    }
}

/// Writes each frame as a single line of JSON
pub struct JsonRenderer<W: Write> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Renderer for JsonRenderer<W> {
    fn palette_len(&self) -> usize {
        1
    }

    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, &Snapshot::from_frame(frame))?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}
