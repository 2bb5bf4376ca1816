//! Light and dark palettes for the demo.

use crossterm::style::Color;

/// How a line should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Normal,
    Muted,
    Heading,
    Accent,
    Error,
    Highlight,
}

#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub heading: Color,
    pub accent: Color,
    pub error: Color,
    pub highlight: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: Color::Rgb { r: 249, g: 250, b: 251 },
            text: Color::Rgb { r: 17, g: 24, b: 39 },
            muted: Color::Rgb { r: 107, g: 114, b: 128 },
            heading: Color::Rgb { r: 17, g: 24, b: 39 },
            accent: Color::Rgb { r: 37, g: 99, b: 235 },
            error: Color::Rgb { r: 220, g: 38, b: 38 },
            highlight: Color::Rgb { r: 219, g: 234, b: 254 },
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb { r: 17, g: 24, b: 39 },
            text: Color::Rgb { r: 229, g: 231, b: 235 },
            muted: Color::Rgb { r: 156, g: 163, b: 175 },
            heading: Color::Rgb { r: 255, g: 255, b: 255 },
            accent: Color::Rgb { r: 96, g: 165, b: 250 },
            error: Color::Rgb { r: 248, g: 113, b: 113 },
            highlight: Color::Rgb { r: 30, g: 58, b: 138 },
        }
    }

    /// Foreground and optional background for a tone.
    pub fn colors(&self, tone: Tone) -> (Color, Option<Color>) {
        match tone {
            Tone::Normal => (self.text, None),
            Tone::Muted => (self.muted, None),
            Tone::Heading => (self.heading, None),
            Tone::Accent => (self.accent, None),
            Tone::Error => (self.error, None),
            Tone::Highlight => (self.text, Some(self.highlight)),
        }
    }
}
