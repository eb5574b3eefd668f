//! `window.__resumekitTest` for browser automation, enabled by a `test=1`
//! query pair.

use crate::dom;
use crate::theme::THEME_ATTR;
use resumekit_core::SiteConfig;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

pub const BRIDGE_NAME: &str = "__resumekitTest";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BridgeState {
    pub theme: Option<String>,
    pub popups: u32,
    pub editable: Option<bool>,
}

/// Whether a `location.search` string carries the `test=1` pair.
#[must_use]
pub fn is_test_query(search: &str) -> bool {
    search
        .strip_prefix('?')
        .unwrap_or(search)
        .split('&')
        .any(|pair| pair == "test=1")
}

fn test_mode_enabled(win: &Window) -> bool {
    win.location()
        .search()
        .is_ok_and(|search| is_test_query(&search))
}

/// Snapshot of the page state the tester asserts on
#[must_use]
pub fn snapshot(doc: &Document, config: &SiteConfig) -> BridgeState {
    let theme = doc
        .document_element()
        .and_then(|root| root.get_attribute(THEME_ATTR));
    let popups = doc
        .query_selector_all(&format!(".{}", config.popup_class))
        .map_or(0, |list| list.length());
    let editable = doc
        .get_element_by_id(&config.ids.edit_button)
        .map(|edit| edit.has_attribute("disabled"));
    BridgeState {
        theme,
        popups,
        editable,
    }
}

/// Expose the bridge when the page was opened in test mode.
///
/// # Errors
/// Returns an error if the bridge object cannot be attached to `window`.
pub fn install(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(win) = dom::window() else {
        return Ok(());
    };
    if !test_mode_enabled(&win) {
        return Ok(());
    }

    let doc = doc.clone();
    let config = config.clone();
    let state = Closure::<dyn FnMut() -> JsValue>::new(move || {
        serde_wasm_bindgen::to_value(&snapshot(&doc, &config)).unwrap_or(JsValue::NULL)
    });

    let bridge = js_sys::Object::new();
    js_sys::Reflect::set(&bridge, &JsValue::from_str("state"), state.as_ref())?;
    js_sys::Reflect::set(&win, &JsValue::from_str(BRIDGE_NAME), &bridge)?;
    state.forget();
    log::info!("Test bridge installed as window.{BRIDGE_NAME}");
    Ok(())
}
