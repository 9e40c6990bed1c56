//! Icon service for the different glyph sets
//!
//! Provides a centralized way to pick the glyphs used throughout the UI,
//! with emoji, Unicode and ASCII fallbacks selectable from configuration.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    Ascii,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self::Unicode
    }
}

/// Resolves glyphs for the active icon theme
#[derive(Debug, Clone, Copy, Default)]
pub struct IconService {
    theme: IconTheme,
}

impl IconService {
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { theme }
    }

    /// Checkbox for a task that is still pending
    #[must_use]
    pub fn pending(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "⬜",
            IconTheme::Unicode => "☐",
            IconTheme::Ascii => "[ ]",
        }
    }

    /// Checkbox for a completed task
    #[must_use]
    pub fn completed(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "✅",
            IconTheme::Unicode => "☑",
            IconTheme::Ascii => "[x]",
        }
    }

    /// Toggle-control glyph while the light theme is active
    #[must_use]
    pub fn theme_light(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "🌙",
            IconTheme::Unicode => "☾",
            IconTheme::Ascii => "(L)",
        }
    }

    /// Toggle-control glyph while the dark theme is active
    #[must_use]
    pub fn theme_dark(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "🌞",
            IconTheme::Unicode => "☀",
            IconTheme::Ascii => "(D)",
        }
    }

    /// Title glyph for the task list pane
    #[must_use]
    pub fn tasks_title(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "📋",
            IconTheme::Unicode => "▤",
            IconTheme::Ascii => "#",
        }
    }

    /// Error dialog glyph
    #[must_use]
    pub fn error(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "❌",
            IconTheme::Unicode => "✗",
            IconTheme::Ascii => "!",
        }
    }

    /// Search indicator glyph
    #[must_use]
    pub fn search(&self) -> &'static str {
        match self.theme {
            IconTheme::Emoji => "🔍",
            IconTheme::Unicode => "⌕",
            IconTheme::Ascii => "/",
        }
    }
}
