//! Seven-segment style: digital-clock digits drawn with block characters
//!
//! Segments are named the usual way:
//!
//! ```text
//!  aaaa
//! f    b
//! f    b
//!  gggg
//! e    c
//! e    c
//!  dddd
//! ```

use std::io::{self, Write};

use crossterm::style::Color;

use super::{terminal::center, Frame, Renderer, Screen};

pub const SEGMENT_HEIGHT: usize = 7;
const SEGMENT_WIDTH: usize = 6;
const LIT: char = '█';

/// Lit segments for each digit
const PATTERNS: [&str; 10] = [
    "abcdef", "bc", "abged", "abgcd", "fgbc", "afgcd", "afedcg", "abc", "abcdefg", "abcfg",
];

const PALETTE: [Color; 4] = [Color::Magenta, Color::Cyan, Color::Yellow, Color::Magenta];
const HEADLINE: Color = Color::Green;
const FLASH_ON: Color = Color::Red;
const FLASH_OFF: Color = Color::DarkRed;

/// Segments lit for `digit`, or none if it is not a decimal digit
pub fn segments(digit: u32) -> &'static str {
    PATTERNS.get(digit as usize).copied().unwrap_or("")
}

/// Draw one digit as rows of block characters
pub fn digit_rows(digit: u32) -> [String; SEGMENT_HEIGHT] {
    let lit = segments(digit);
    let on = |segment: char| lit.contains(segment);
    let horizontal = |segment: char| {
        if on(segment) {
            format!(" {} ", LIT.to_string().repeat(SEGMENT_WIDTH - 2))
        } else {
            " ".repeat(SEGMENT_WIDTH)
        }
    };
    let vertical = |left: char, right: char| {
        let l = if on(left) { LIT } else { ' ' };
        let r = if on(right) { LIT } else { ' ' };
        format!("{l}{}{r}", " ".repeat(SEGMENT_WIDTH - 2))
    };

    [
        horizontal('a'),
        vertical('f', 'b'),
        vertical('f', 'b'),
        horizontal('g'),
        vertical('e', 'c'),
        vertical('e', 'c'),
        horizontal('d'),
    ]
}

fn colon_rows(visible: bool) -> [String; SEGMENT_HEIGHT] {
    let dot = if visible { format!(" {LIT} ") } else { "   ".to_string() };
    let gap = "   ".to_string();
    [gap.clone(), gap.clone(), dot.clone(), gap.clone(), dot, gap.clone(), gap]
}

/// Lay out `text` as seven-segment rows. Colons are drawn only when
/// `colons_visible`; other characters become a blank cell.
pub fn compose(text: &str, colons_visible: bool) -> Vec<String> {
    let mut rows = vec![String::new(); SEGMENT_HEIGHT];
    for (n, c) in text.chars().enumerate() {
        let cell = match c {
            ':' => colon_rows(colons_visible),
            _ => match c.to_digit(10) {
                Some(d) => digit_rows(d),
                None => digit_rows(u32::MAX),
            },
        };
        for (row, part) in rows.iter_mut().zip(cell) {
            if n > 0 {
                row.push(' ');
            }
            row.push_str(&part);
        }
    }
    rows
}

/// Digital-display countdown with cycling colors and blinking colons.
/// When expired the display reads `00:00:00` and flashes between red and dark red.
pub struct SegmentRenderer<W: Write> {
    screen: Screen<W>,
}

impl<W: Write> SegmentRenderer<W> {
    pub fn new(screen: Screen<W>) -> Self {
        Self { screen }
    }

    pub fn screen(&self) -> &Screen<W> {
        &self.screen
    }
}

impl<W: Write> Renderer for SegmentRenderer<W> {
    fn palette_len(&self) -> usize {
        PALETTE.len()
    }

    fn render(&mut self, frame: &Frame<'_>) -> io::Result<()> {
        let width = self.screen.width();
        let (headline, headline_color, text, color, colons) = if frame.tick.expired {
            let flash = if frame.blink_on { FLASH_ON } else { FLASH_OFF };
            (frame.finished_message, FLASH_ON, "00:00:00".to_string(), flash, true)
        } else {
            let color = PALETTE[frame.accent % PALETTE.len()];
            (frame.message, HEADLINE, frame.tick.remaining.to_string(), color, frame.blink_on)
        };

        self.screen.begin_frame()?;
        self.screen.blank()?;
        self.screen.line(&center(headline, width), headline_color, true)?;
        self.screen.blank()?;
        for row in compose(&text, colons) {
            self.screen.line(&center(&row, width), color, true)?;
        }
        self.screen.end_frame()
    }
}
