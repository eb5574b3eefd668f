//! Page configuration: element ids, delays, glyphs and user-facing messages.
//!
//! Defaults match the site templates. A page may embed a JSON document to
//! override any subset of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Delay `{name}` must be greater than zero")]
    ZeroDelay { name: &'static str },
    #[error("Element id `{name}` must not be empty")]
    EmptyId { name: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    pub theme_toggle: String,
    pub nav_toggle: String,
    pub nav_links: String,
    pub datetime: String,
    pub signup_form: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub profile_image: String,
    pub profile_upload: String,
    pub profile_change: String,
    pub profile_remove: String,
    pub profile_form: String,
    pub edit_button: String,
    pub save_button: String,
    pub resume_preview: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            theme_toggle: "themeToggle".to_string(),
            nav_toggle: "navToggle".to_string(),
            nav_links: "navLinks".to_string(),
            datetime: "datetime".to_string(),
            signup_form: "signup-form".to_string(),
            name: "name".to_string(),
            email: "email".to_string(),
            password: "password1".to_string(),
            password_confirm: "password2".to_string(),
            profile_image: "profileImage".to_string(),
            profile_upload: "profileUpload".to_string(),
            profile_change: "profileChange".to_string(),
            profile_remove: "profileRemove".to_string(),
            profile_form: "profile-form".to_string(),
            edit_button: "edit-btn".to_string(),
            save_button: "save-btn".to_string(),
            resume_preview: "resume-pic-preview".to_string(),
        }
    }
}

impl ElementIds {
    fn check(&self) -> Result<(), ConfigError> {
        let named = [
            ("theme_toggle", &self.theme_toggle),
            ("nav_toggle", &self.nav_toggle),
            ("nav_links", &self.nav_links),
            ("datetime", &self.datetime),
            ("signup_form", &self.signup_form),
            ("name", &self.name),
            ("email", &self.email),
            ("password", &self.password),
            ("password_confirm", &self.password_confirm),
            ("profile_image", &self.profile_image),
            ("profile_upload", &self.profile_upload),
            ("profile_change", &self.profile_change),
            ("profile_remove", &self.profile_remove),
            ("profile_form", &self.profile_form),
            ("edit_button", &self.edit_button),
            ("save_button", &self.save_button),
            ("resume_preview", &self.resume_preview),
        ];
        match named.iter().find(|(_, id)| id.trim().is_empty()) {
            Some((name, _)) => Err(ConfigError::EmptyId { name: *name }),
            None => Ok(()),
        }
    }
}

/// Delays in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delays {
    pub popup_ms: u32,
    pub reveal_ms: u32,
    pub clock_tick_ms: u32,
}

impl Default for Delays {
    fn default() -> Self {
        Self {
            popup_ms: 3_000,
            reveal_ms: 5_000,
            clock_tick_ms: 1_000,
        }
    }
}

/// Clamp a delay to the range browser timer APIs accept
#[must_use]
pub fn timeout_ms(delay: u32) -> i32 {
    i32::try_from(delay).unwrap_or(i32::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealGlyphs {
    pub masked: String,
    pub unmasked: String,
}

impl Default for RevealGlyphs {
    fn default() -> Self {
        Self {
            masked: "👁️".to_string(),
            unmasked: "🙈".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    pub picture_reset: String,
    pub changes_saved: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            picture_reset: "Profile picture reset to default.".to_string(),
            changes_saved: "Changes have been saved.".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub ids: ElementIds,
    pub delays: Delays,
    pub glyphs: RevealGlyphs,
    pub messages: Messages,
    pub storage_key: String,
    pub popup_class: String,
    pub nav_active_class: String,
    pub upload_field_name: String,
    pub default_source_attr: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            ids: ElementIds::default(),
            delays: Delays::default(),
            glyphs: RevealGlyphs::default(),
            messages: Messages::default(),
            storage_key: crate::theme::THEME_KEY.to_string(),
            popup_class: "flash-popup".to_string(),
            nav_active_class: "active".to_string(),
            upload_field_name: "profile_pic".to_string(),
            default_source_attr: "data-default".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse an override document and validate the result
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid JSON for this shape, or
    /// if it sets a delay to zero or an id to an empty string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse an optional override document, falling back to defaults on any error
    #[must_use]
    pub fn from_json_or_default(json: Option<&str>) -> Self {
        let Some(json) = json.map(str::trim).filter(|j| !j.is_empty()) else {
            return Self::default();
        };
        Self::from_json(json).unwrap_or_else(|err| {
            log::warn!("Ignoring page config: {err}");
            Self::default()
        })
    }

    /// # Errors
    ///
    /// Returns the first zero delay or empty element id found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delays.popup_ms == 0 {
            return Err(ConfigError::ZeroDelay { name: "popup_ms" });
        }
        if self.delays.reveal_ms == 0 {
            return Err(ConfigError::ZeroDelay { name: "reveal_ms" });
        }
        if self.delays.clock_tick_ms == 0 {
            return Err(ConfigError::ZeroDelay {
                name: "clock_tick_ms",
            });
        }
        self.ids.check()
    }
}
