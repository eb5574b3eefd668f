#![forbid(unsafe_code)]
//! Resumekit page behaviors compiled to WebAssembly.
//!
//! Each component attaches to elements found by id when the page loads and
//! is skipped when its elements are absent.

use resumekit_core::{SiteConfig, timeout_ms};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod clock;
pub mod dom;
pub mod logger;
pub mod nav;
pub mod notify;
pub mod page_config;
pub mod password;
pub mod profile_form;
pub mod profile_image;
pub mod signup;
pub mod storage;
pub mod test_bridge;
pub mod theme;

fn report(component: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        log::error!("{component} failed to attach: {}", dom::js_error_message(&err));
    }
}

/// Attach every component to `doc`. Failures are logged per component and
/// never stop the others.
pub fn boot(doc: &Document, config: &SiteConfig) {
    let notifier = notify::Notifier::from_config(config);
    report("theme", theme::attach(doc, config));
    report("nav", nav::attach(doc, config));
    report("clock", clock::attach(doc, config));
    report("password", password::attach(doc, config));
    report("signup", signup::attach(doc, config, &notifier));
    report("profile picture", profile_image::attach(doc, config, &notifier));
    report(
        "profile form",
        profile_form::attach(doc, config, &notifier).map(|_| ()),
    );
    report(
        "resume preview",
        profile_image::attach_resume_preview(doc, config),
    );
    report("test bridge", test_bridge::install(doc, config));
}

/// Inline-handler entry point: `onclick="togglePassword('password1', this)"`.
#[wasm_bindgen(js_name = togglePassword)]
pub fn toggle_password(input_id: &str, toggle: &web_sys::Element) {
    let Some(doc) = dom::document() else {
        return;
    };
    let config = page_config::load(&doc);
    let result = password::toggle_password(
        &doc,
        input_id,
        toggle,
        &config.glyphs,
        timeout_ms(config.delays.reveal_ms),
    );
    report("password toggle", result);
}

/// Inline-handler entry point for showing a popup from page scripts.
#[wasm_bindgen]
pub fn popup(message: &str) {
    let Some(doc) = dom::document() else {
        return;
    };
    let config = page_config::load(&doc);
    notify::Notifier::from_config(&config).notify(&doc, message);
}

/// Assign `togglePassword` and `popup` on `window` so inline `onclick`
/// attributes can call them by name.
///
/// # Errors
/// Returns an error if either property cannot be set on `window`.
pub fn install_globals() -> Result<(), JsValue> {
    let Some(win) = dom::window() else {
        return Ok(());
    };
    let toggle = Closure::<dyn Fn(String, web_sys::Element)>::new(
        |input_id: String, el: web_sys::Element| toggle_password(&input_id, &el),
    );
    let show = Closure::<dyn Fn(String)>::new(|message: String| popup(&message));
    js_sys::Reflect::set(&win, &JsValue::from_str("togglePassword"), toggle.as_ref())?;
    js_sys::Reflect::set(&win, &JsValue::from_str("popup"), show.as_ref())?;
    toggle.forget();
    show.forget();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);

    let Some(doc) = dom::document() else {
        dom::console_error("resumekit: no document, page behaviors disabled");
        return;
    };
    report("inline handlers", install_globals());
    let ready_doc = doc.clone();
    let result = dom::on_ready(&doc, move || {
        let config = page_config::load(&ready_doc);
        boot(&ready_doc, &config);
    });
    report("page", result);
}
