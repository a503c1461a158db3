//! Terminal style: block-letter banner over ASCII-art digits

use std::io::{self, Write};

use crossterm::style::Color;

use super::{terminal::center, Frame, Renderer, Screen, DEFAULT_MESSAGE};

/// Rows in every digit glyph
pub const GLYPH_HEIGHT: usize = 10;
const GLYPH_WIDTH: usize = 8;

const PALETTE: [Color; 4] = [Color::Magenta, Color::Cyan, Color::Yellow, Color::Green];

const BANNER: [&str; 11] = [
    "████████ ██   ██ ███████     ██      ██ ██    ██ ███████ ███████ ████████ ██████  ███████  █████  ███    ███",
    "   ██    ██   ██ ██          ██      ██ ██    ██ ██      ██         ██    ██   ██ ██      ██   ██ ████  ████",
    "   ██    ███████ █████       ██      ██ ██    ██ █████   ███████    ██    ██████  █████   ███████ ██ ████ ██",
    "   ██    ██   ██ ██          ██      ██  ██  ██  ██           ██    ██    ██   ██ ██      ██   ██ ██  ██  ██",
    "   ██    ██   ██ ███████     ███████ ██   ████   ███████ ███████    ██    ██   ██ ███████ ██   ██ ██      ██",
    "                                                                                                             ",
    "                ███████ ████████  █████  ██████  ████████ ███████     ██ ███    ██                           ",
    "                ██         ██    ██   ██ ██   ██    ██    ██          ██ ████   ██                           ",
    "                ███████    ██    ███████ ██████     ██    ███████     ██ ██ ██  ██                           ",
    "                     ██    ██    ██   ██ ██   ██    ██         ██     ██ ██  ██ ██                           ",
    "                ███████    ██    ██   ██ ██   ██    ██    ███████     ██ ██   ████                           ",
];

static DIGITS: [[&str; GLYPH_HEIGHT]; 10] = [
    [
        "  ████  ",
        " ██  ██ ",
        "██    ██",
        "██    ██",
        "██    ██",
        "██    ██",
        "██    ██",
        "██    ██",
        " ██  ██ ",
        "  ████  ",
    ],
    [
        "   ██   ",
        "  ███   ",
        " ████   ",
        "   ██   ",
        "   ██   ",
        "   ██   ",
        "   ██   ",
        "   ██   ",
        "   ██   ",
        " ██████ ",
    ],
    [
        " ██████ ",
        "██    ██",
        "      ██",
        "      ██",
        "   ████ ",
        " ████   ",
        "██      ",
        "██      ",
        "██      ",
        "████████",
    ],
    [
        " ██████ ",
        "██    ██",
        "      ██",
        "      ██",
        "  █████ ",
        "      ██",
        "      ██",
        "      ██",
        "██    ██",
        " ██████ ",
    ],
    [
        "██    ██",
        "██    ██",
        "██    ██",
        "██    ██",
        "████████",
        "      ██",
        "      ██",
        "      ██",
        "      ██",
        "      ██",
    ],
    [
        "████████",
        "██      ",
        "██      ",
        "██      ",
        "███████ ",
        "      ██",
        "      ██",
        "      ██",
        "██    ██",
        " ██████ ",
    ],
    [
        " ██████ ",
        "██    ██",
        "██      ",
        "██      ",
        "███████ ",
        "██    ██",
        "██    ██",
        "██    ██",
        "██    ██",
        " ██████ ",
    ],
    [
        "████████",
        "      ██",
        "     ██ ",
        "    ██  ",
        "   ██   ",
        "  ██    ",
        " ██     ",
        " ██     ",
        " ██     ",
        " ██     ",
    ],
    [
        " ██████ ",
        "██    ██",
        "██    ██",
        "██    ██",
        " ██████ ",
        "██    ██",
        "██    ██",
        "██    ██",
        "██    ██",
        " ██████ ",
    ],
    [
        " ██████ ",
        "██    ██",
        "██    ██",
        "██    ██",
        " ███████",
        "      ██",
        "      ██",
        "      ██",
        "██    ██",
        " ██████ ",
    ],
];

static COLON: [&str; GLYPH_HEIGHT] = [
    "        ",
    "        ",
    "  ████  ",
    "  ████  ",
    "        ",
    "        ",
    "  ████  ",
    "  ████  ",
    "        ",
    "        ",
];

/// Glyph rows for one character. Anything that is not a digit or a colon is blank.
fn glyph(c: char) -> Option<&'static [&'static str; GLYPH_HEIGHT]> {
    match c {
        ':' => Some(&COLON),
        _ => c.to_digit(10).map(|d| &DIGITS[d as usize]),
    }
}

/// Lay out `text` as rows of ASCII art, glyphs side by side
pub fn compose(text: &str) -> Vec<String> {
    let blank = " ".repeat(GLYPH_WIDTH);
    let mut rows = vec![String::new(); GLYPH_HEIGHT];
    for c in text.chars() {
        for (i, row) in rows.iter_mut().enumerate() {
            match glyph(c) {
                Some(g) => row.push_str(g[i]),
                None => row.push_str(&blank),
            }
        }
    }
    rows
}

/// The terminal countdown: banner in the cycling accent color, then the
/// remaining time in large digits. Once expired, the finished message and
/// `00:00:00` are shown in red.
pub struct AsciiRenderer<W: Write> {
    screen: Screen<W>,
}

impl<W: Write> AsciiRenderer<W> {
    pub fn new(screen: Screen<W>) -> Self {
        Self { screen }
    }

    pub fn screen(&self) -> &Screen<W> {
        &self.screen
    }

    fn header(&mut self, message: &str, color: Color) -> io::Result<()> {
        let width = self.screen.width();
        // The banner only spells out the default headline
        if message == DEFAULT_MESSAGE {
            let banner_width = BANNER[0].chars().count();
            let padding = " ".repeat(width.saturating_sub(banner_width) / 2);
            for line in BANNER {
                let text = if banner_width > width {
                    center(line, width)
                } else {
                    format!("{padding}{line}")
                };
                self.screen.line(&text, color, true)?;
            }
        } else {
            self.screen.line(&center(message, width), color, true)?;
        }
        self.screen.blank()?;
        self.screen.blank()
    }
}

impl<W: Write> Renderer for AsciiRenderer<W> {
    fn palette_len(&self) -> usize {
        PALETTE.len()
    }

    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        self.screen.begin_frame()?;

        if frame.tick.expired {
            let width = self.screen.width();
            self.screen.blank()?;
            self.screen.blank()?;
            let message = center(&frame.finished_message.to_uppercase(), width);
            self.screen.line(&message, Color::Red, true)?;
            self.screen.blank()?;
            for row in compose("00:00:00") {
                self.screen.line(&row, Color::Red, false)?;
            }
        } else {
            let color = PALETTE[frame.accent % PALETTE.len()];
            self.header(frame.message, color)?;
            for row in compose(&frame.tick.remaining.to_string()) {
                self.screen.line(&row, color, false)?;
            }
        }

        self.screen.end_frame()
    }
}
