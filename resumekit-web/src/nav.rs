use crate::dom;
use resumekit_core::SiteConfig;
use wasm_bindgen::JsValue;
use web_sys::Document;

/// Toggle the mobile navigation list's active class from the menu button.
///
/// # Errors
/// Returns an error if the click listener cannot be bound.
pub fn attach(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let (Some(button), Some(links)) = (
        doc.get_element_by_id(&config.ids.nav_toggle),
        doc.get_element_by_id(&config.ids.nav_links),
    ) else {
        return Ok(());
    };
    let class = config.nav_active_class.clone();
    dom::listen(&button, "click", move |_| {
        if let Err(err) = links.class_list().toggle(&class) {
            log::warn!("Navigation toggle failed: {}", dom::js_error_message(&err));
        }
    })
}
