use resumekit_core::SiteConfig;
use resumekit_web::dom;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

/// Replace the body with `markup` and hand back the document.
pub fn mount(markup: &str) -> Document {
    let doc = dom::document().expect("document");
    doc.body().expect("body").set_inner_html(markup);
    doc
}

pub fn click(doc: &Document, id: &str) {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} present"))
        .dyn_into::<HtmlElement>()
        .expect("html element")
        .click();
}

pub fn popup_texts(doc: &Document) -> Vec<String> {
    let list = doc.query_selector_all(".flash-popup").expect("query");
    (0..list.length())
        .filter_map(|idx| list.item(idx))
        .map(|node| node.text_content().unwrap_or_default())
        .collect()
}

/// Defaults with timers shortened so tests finish quickly
pub fn fast_config() -> SiteConfig {
    let mut config = SiteConfig::default();
    config.delays.popup_ms = 60;
    config.delays.reveal_ms = 60;
    config
}

pub fn is_disabled(doc: &Document, id: &str) -> bool {
    doc.get_element_by_id(id)
        .unwrap_or_else(|| panic!("#{id} present"))
        .has_attribute("disabled")
}

/// Yield to the browser event loop for `duration_ms`.
pub async fn sleep_ms(duration_ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        dom::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, duration_ms)
            .expect("timer scheduled");
    });
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .expect("timer resolves");
}
