//! Theme rotation and persistence.
//! Themes cycle light -> dark -> minimal -> light and the current choice is
//! written to the preference store on every application.

use crate::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Storage key for the persisted theme
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Minimal,
}

/// Fixed rotation order
pub const THEMES: [Theme; 3] = [Theme::Light, Theme::Dark, Theme::Minimal];

impl Theme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Minimal => "minimal",
        }
    }

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Light => 0,
            Self::Dark => 1,
            Self::Minimal => 2,
        }
    }

    #[must_use]
    pub const fn next(self) -> Self {
        THEMES[(self.index() + 1) % THEMES.len()]
    }

    /// Resolve a persisted value, falling back to light for anything unknown
    #[must_use]
    pub fn from_persisted(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme `{0}`")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        THEMES
            .iter()
            .copied()
            .find(|theme| theme.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Owns the current theme selection for the lifetime of a page.
///
/// The controller never touches the document itself; callers reflect the
/// returned [`Theme`] onto whatever surface they style.
#[derive(Debug)]
pub struct ThemeController<S: PreferenceStore> {
    store: S,
    key: String,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, THEME_KEY)
    }

    pub fn with_key(store: S, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
            current: Theme::default(),
        }
    }

    /// Read the persisted theme and apply it. Read failures count as absent.
    pub fn init_theme(&mut self) -> Theme {
        let saved = match self.store.get(&self.key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("Failed to read persisted theme: {err}");
                None
            }
        };
        let theme = Theme::from_persisted(saved.as_deref());
        self.apply_theme(theme)
    }

    /// Advance to the next theme in rotation and apply it
    pub fn toggle_theme(&mut self) -> Theme {
        let next = self.current.next();
        self.apply_theme(next)
    }

    /// Make `theme` current and persist it
    pub fn apply_theme(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        if let Err(err) = self.store.set(&self.key, theme.as_str()) {
            log::warn!("Failed to persist theme `{theme}`: {err}");
        }
        theme
    }

    #[must_use]
    pub const fn current(&self) -> Theme {
        self.current
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }
}
