//! Terminal screen handling shared by the text renderers

use std::io::{self, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use tracing::debug;

/// Width assumed when the output is not a terminal
const FALLBACK_WIDTH: u16 = 80;

/// Owns the output stream for a text renderer. In fullscreen mode the
/// alternate screen is used and the cursor hidden until the screen is dropped.
pub struct Screen<W: Write> {
    out: W,
    fullscreen: bool,
    width: Option<u16>,
}

impl<W: Write> Screen<W> {
    pub fn new(mut out: W, fullscreen: bool) -> io::Result<Self> {
        if fullscreen {
            execute!(out, EnterAlternateScreen, Hide)?;
            debug!("Entered alternate screen");
        }
        Ok(Self { out, fullscreen, width: None })
    }

    /// Pin the width instead of querying the terminal
    pub fn with_width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn width(&self) -> usize {
        let width = self
            .width
            .or_else(|| terminal::size().ok().map(|(w, _)| w))
            .unwrap_or(FALLBACK_WIDTH);
        width as usize
    }

    /// Clear the screen and home the cursor
    pub fn begin_frame(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Write one line in `color` on a black background
    pub fn line(&mut self, text: &str, color: Color, bold: bool) -> io::Result<()> {
        queue!(self.out, SetBackgroundColor(Color::Black), SetForegroundColor(color))?;
        if bold {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        queue!(
            self.out,
            Print(text),
            SetAttribute(Attribute::Reset),
            ResetColor,
            Print("\r\n")
        )
    }

    pub fn blank(&mut self) -> io::Result<()> {
        queue!(self.out, Print("\r\n"))
    }

    pub fn end_frame(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }
}

impl<W: Write> Drop for Screen<W> {
    fn drop(&mut self) {
        let _ = queue!(self.out, SetAttribute(Attribute::Reset), ResetColor);
        if self.fullscreen {
            let _ = queue!(self.out, Show, LeaveAlternateScreen);
        }
        let _ = self.out.flush();
    }
}

/// Pad `text` on the left so it sits in the middle of `width` columns.
/// Text wider than `width` is cut short and ends in "...".
pub fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len > width {
        let keep = width.saturating_sub(3);
        let mut cut: String = text.chars().take(keep).collect();
        cut.push_str("...");
        return cut;
    }
    let padding = (width - len) / 2;
    format!("{}{}", " ".repeat(padding), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_pads_left() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abc", 6), " abc");
    }

    #[test]
    fn test_center_truncates_wide_text() {
        assert_eq!(center("██████████", 6), "███...");
    }

    #[test]
    fn test_frame_is_written_with_colors() {
        let mut screen = Screen::new(Vec::new(), false).unwrap().with_width(40);
        screen.begin_frame().unwrap();
        screen.line("hello", Color::Magenta, true).unwrap();
        screen.end_frame().unwrap();
        let written = String::from_utf8(screen.get_ref().clone()).unwrap();
        assert!(written.contains("hello"));
        assert!(written.contains('\x1b'));
        assert_eq!(screen.width(), 40);
    }
}
