use crate::dom;
use crate::storage::LocalStore;
use resumekit_core::{PreferenceStore, SiteConfig, Theme, ThemeController};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Attribute on `<html>` that stylesheets key their palettes on
pub const THEME_ATTR: &str = "data-theme";

/// Mark the root element with `theme`.
///
/// # Errors
/// Returns an error if the attribute cannot be written.
pub fn reflect(doc: &Document, theme: Theme) -> Result<(), JsValue> {
    match doc.document_element() {
        Some(root) => root.set_attribute(THEME_ATTR, theme.as_str()),
        None => Ok(()),
    }
}

/// Apply the saved theme and wire the toggle button, persisting to `localStorage`.
///
/// # Errors
/// Returns an error if the theme cannot be reflected or the click listener cannot be bound.
pub fn attach(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    attach_with_store(doc, config, LocalStore::open()).map(|_| ())
}

/// Same as [`attach`] with an explicit store; returns the shared controller.
///
/// # Errors
/// Returns an error if the theme cannot be reflected or the click listener cannot be bound.
pub fn attach_with_store<S>(
    doc: &Document,
    config: &SiteConfig,
    store: S,
) -> Result<Rc<RefCell<ThemeController<S>>>, JsValue>
where
    S: PreferenceStore + 'static,
{
    let mut controller = ThemeController::with_key(store, &config.storage_key);
    reflect(doc, controller.init_theme())?;
    let controller = Rc::new(RefCell::new(controller));

    let Some(button) = doc.get_element_by_id(&config.ids.theme_toggle) else {
        log::debug!("No #{} on this page", config.ids.theme_toggle);
        return Ok(controller);
    };

    let shared = Rc::clone(&controller);
    let doc = doc.clone();
    dom::listen(&button, "click", move |_| {
        let theme = shared.borrow_mut().toggle_theme();
        if let Err(err) = reflect(&doc, theme) {
            log::warn!("Failed to apply theme {theme}: {}", dom::js_error_message(&err));
        }
    })?;
    Ok(controller)
}
