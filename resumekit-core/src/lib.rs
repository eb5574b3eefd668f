//! Resumekit page-behavior core
//!
//! Platform-agnostic logic behind the Resumekit site scripts: theme rotation,
//! signup validation, password reveal sessions, profile edit toggling and
//! preview bookkeeping. Nothing in this crate touches a browser; the web crate
//! binds these types to DOM events.

pub mod config;
pub mod edit_toggle;
pub mod password;
pub mod preview;
pub mod reveal;
pub mod signup;
pub mod store;
pub mod text;
pub mod theme;

// Re-export commonly used types
pub use config::{
    ConfigError, Delays, ElementIds, Messages, RevealGlyphs, SiteConfig, timeout_ms,
};
pub use edit_toggle::{EditMode, FieldAccess, FormEditToggle, is_toggled_field};
pub use password::{PASSWORD_RULES, PasswordRule, SPECIAL_CHARACTERS, first_failed_rule};
pub use preview::{PreviewTracker, SelectionToken};
pub use reveal::{PasswordReveal, RevealSession, RevealState, RevealTransition};
pub use signup::{SignupFields, SignupFailure, validate_signup};
pub use store::{MemoryStore, StoreError};
pub use text::{trim_form_value, utf16_len};
pub use theme::{THEME_KEY, THEMES, Theme, ThemeController, UnknownTheme};

/// Trait for abstracting the durable key-value store preferences live in.
/// Platform-specific implementations should provide this
pub trait PreferenceStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Read a stored value, `None` when the key was never written
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a value, replacing any previous one
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying store rejects the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;
}
