//! Raw-mode terminal that draws whole frames of text lines.

use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self, Event},
    execute, queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use gridform::text::{display_width, truncate_to_width};

use crate::theme::{Theme, Tone};

/// One line of a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }

    pub fn blank() -> Self {
        Self::new("", Tone::Normal)
    }
}

pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    pub fn size(&self) -> io::Result<(u16, u16)> {
        terminal::size()
    }

    /// Block for the next event, then drain whatever else is pending.
    pub fn poll(&self) -> io::Result<Vec<Event>> {
        let mut events = vec![event::read()?];
        while event::poll(Duration::ZERO)? {
            events.push(event::read()?);
        }
        Ok(events)
    }

    /// Draw a frame, clipping lines to the terminal size.
    pub fn draw(&mut self, lines: &[Line], theme: &Theme) -> io::Result<()> {
        let (width, height) = terminal::size()?;
        let width = width as usize;

        queue!(
            self.stdout,
            SetBackgroundColor(theme.background),
            Clear(ClearType::All)
        )?;

        for (y, line) in lines.iter().take(height as usize).enumerate() {
            let (fg, bg) = theme.colors(line.tone);
            let mut text = truncate_to_width(&line.text, width);
            if bg.is_some() {
                let fill = width.saturating_sub(display_width(&text));
                text.push_str(&" ".repeat(fill));
            }
            queue!(
                self.stdout,
                cursor::MoveTo(0, y as u16),
                SetBackgroundColor(bg.unwrap_or(theme.background)),
                SetForegroundColor(fg),
                Print(text)
            )?;
        }

        queue!(self.stdout, ResetColor)?;
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
