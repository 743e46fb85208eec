//! Terminal capability detection and colouring

use owo_colors::{OwoColorize, colors::css};

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// Optional tinting for status messages.
///
/// A disabled palette returns text unchanged, which keeps transcripts
/// byte-for-byte comparable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub const fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// A palette that is enabled when stdout can show colour.
    pub fn detect() -> Self {
        Self::new(supports_color())
    }

    /// Color as success (green)
    pub fn success(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Green>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Color as warning (amber)
    pub fn warning(self, text: &str) -> String {
        if self.enabled {
            text.fg::<css::Orange>().to_string()
        } else {
            text.to_string()
        }
    }

    /// Dim the text
    pub fn dim(self, text: &str) -> String {
        if self.enabled {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }
}
