//! Light/dark theme state and persistence
//!
//! The theme is a two-state machine whose current value survives restarts as
//! a single `theme = "light"|"dark"` entry in a small state file. Persistence
//! sits behind [`ThemePersistence`] so the state machine can be exercised
//! with an in-memory store in tests.

use anyhow::{Context, Result};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Display mode, persisted across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognized falls back to light
    #[must_use]
    pub fn from_persisted(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    /// Colors the UI resolves this theme to
    #[must_use]
    pub fn palette(self) -> Palette {
        match self {
            Self::Light => Palette {
                background: Color::White,
                foreground: Color::Black,
                accent: Color::Blue,
                dimmed: Color::DarkGray,
                highlight_fg: Color::White,
                highlight_bg: Color::Blue,
            },
            Self::Dark => Palette {
                background: Color::Black,
                foreground: Color::White,
                accent: Color::Cyan,
                dimmed: Color::Gray,
                highlight_fg: Color::Black,
                highlight_bg: Color::Cyan,
            },
        }
    }
}

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
}

/// Opaque persisted string store holding the theme value
pub trait ThemePersistence {
    /// Read the persisted value, `None` when unset or unreadable
    fn load(&self) -> Option<String>;

    /// Write the value; called on every toggle
    fn save(&mut self, value: &str) -> Result<()>;
}

impl ThemePersistence for Box<dyn ThemePersistence> {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&mut self, value: &str) -> Result<()> {
        (**self).save(value)
    }
}

/// On-disk serialized form of the theme state file
#[derive(Debug, Serialize, Deserialize)]
struct ThemeState {
    theme: String,
}

/// File-backed store: a one-entry TOML file in the XDG config directory
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Default location: `$XDG_CONFIG_HOME/taskline/theme.toml`
    pub fn default_path() -> Result<PathBuf> {
        dirs::config_dir()
            .context("Could not determine config directory")
            .map(|dir| dir.join("taskline").join("theme.toml"))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemePersistence for FileThemeStore {
    fn load(&self) -> Option<String> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        let state: ThemeState = toml::from_str(&content).ok()?;
        Some(state.theme)
    }

    fn save(&mut self, value: &str) -> Result<()> {
        let state = ThemeState {
            theme: value.to_string(),
        };
        let content = toml::to_string(&state).context("Failed to serialize theme state")?;

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create state directory: {}", parent.display()))?;
        }

        std::fs::write(&self.path, content)
            .with_context(|| format!("Failed to write theme state: {}", self.path.display()))
    }
}

/// In-memory store for tests and headless use
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    value: Option<String>,
}

impl MemoryThemeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
        }
    }

    #[must_use]
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl ThemePersistence for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> Result<()> {
        self.value = Some(value.to_string());
        Ok(())
    }
}

/// Current theme plus its backing store
pub struct ThemeManager<S: ThemePersistence> {
    current: Theme,
    store: S,
}

impl<S: ThemePersistence> ThemeManager<S> {
    /// Load the persisted theme at startup, defaulting to light when unset
    pub fn load(store: S) -> Self {
        let current = store
            .load()
            .map(|value| Theme::from_persisted(&value))
            .unwrap_or_default();
        Self { current, store }
    }

    #[must_use]
    pub fn current(&self) -> Theme {
        self.current
    }

    /// The backing store, mostly useful for inspecting persisted state
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn palette(&self) -> Palette {
        self.current.palette()
    }

    /// Flip the theme and persist the new value
    pub fn toggle(&mut self) -> Result<Theme> {
        self.current = self.current.toggled();
        self.store.save(self.current.as_str())?;
        Ok(self.current)
    }
}
