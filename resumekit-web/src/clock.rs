use crate::dom;
use resumekit_core::{SiteConfig, timeout_ms};
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

/// Current local date and time as the browser formats it
#[must_use]
pub fn now_string() -> String {
    js_sys::Date::new_0()
        .to_locale_string("default", &JsValue::UNDEFINED)
        .into()
}

fn render(el: &Element) {
    el.set_text_content(Some(&now_string()));
}

/// Fill the clock element now and keep it current.
///
/// # Errors
/// Returns an error if the refresh interval cannot be scheduled.
pub fn attach(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(el) = doc.get_element_by_id(&config.ids.datetime) else {
        return Ok(());
    };
    render(&el);
    dom::set_interval(timeout_ms(config.delays.clock_tick_ms), move || render(&el))?;
    Ok(())
}
