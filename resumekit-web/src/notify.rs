//! Transient popup messages.
//!
//! Each popup is its own element with its own expiry timer. Popups stack and
//! are never merged or queued.

use crate::dom;
use resumekit_core::{SiteConfig, timeout_ms};
use wasm_bindgen::JsValue;
use web_sys::Document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notifier {
    class_name: String,
    expiry_ms: i32,
}

impl Notifier {
    #[must_use]
    pub fn new(class_name: &str, expiry_ms: i32) -> Self {
        Self {
            class_name: class_name.to_string(),
            expiry_ms,
        }
    }

    #[must_use]
    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(&config.popup_class, timeout_ms(config.delays.popup_ms))
    }

    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Append a popup with `message` to the body and schedule its removal.
    ///
    /// # Errors
    /// Returns an error if the element cannot be created or the expiry timer cannot be set.
    pub fn show(&self, doc: &Document, message: &str) -> Result<(), JsValue> {
        let Some(body) = doc.body() else {
            return Ok(());
        };
        let popup = doc.create_element("div")?;
        popup.set_class_name(&self.class_name);
        popup.set_text_content(Some(message));
        body.append_child(&popup)?;
        dom::set_timeout(self.expiry_ms, move || popup.remove())?;
        Ok(())
    }

    /// Show a popup, logging instead of failing
    pub fn notify(&self, doc: &Document, message: &str) {
        if let Err(err) = self.show(doc, message) {
            log::warn!("Popup `{message}` not shown: {}", dom::js_error_message(&err));
        }
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::from_config(&SiteConfig::default())
    }
}
