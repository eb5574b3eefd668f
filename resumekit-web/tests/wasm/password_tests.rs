use crate::support::{click, fast_config, mount, sleep_ms};
use resumekit_web::password;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlInputElement};

const MARKUP: &str = r#"
    <input id="password1" type="password" value="Secret1!">
    <span id="eye" data-toggle-password="password1">👁️</span>
"#;

fn field_type(doc: &Document) -> String {
    doc.get_element_by_id("password1")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .type_()
}

fn glyph(doc: &Document) -> String {
    doc.get_element_by_id("eye")
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
async fn reveal_remasks_after_delay() {
    let doc = mount(MARKUP);
    password::attach(&doc, &fast_config()).unwrap();

    click(&doc, "eye");
    assert_eq!(field_type(&doc), "text");
    assert_eq!(glyph(&doc), "🙈");

    sleep_ms(120).await;
    assert_eq!(field_type(&doc), "password");
    assert_eq!(glyph(&doc), "👁️");
}

#[wasm_bindgen_test]
async fn manual_mask_cancels_pending_remask() {
    let doc = mount(MARKUP);
    let mut config = fast_config();
    config.delays.reveal_ms = 150;
    password::attach(&doc, &config).unwrap();

    click(&doc, "eye");
    click(&doc, "eye");
    assert_eq!(field_type(&doc), "password");

    // A fresh reveal must survive the first reveal's deadline
    sleep_ms(100).await;
    click(&doc, "eye");
    sleep_ms(80).await;
    assert_eq!(field_type(&doc), "text");

    sleep_ms(150).await;
    assert_eq!(field_type(&doc), "password");
}

#[wasm_bindgen_test]
fn exported_toggle_ignores_missing_input() {
    let doc = mount(r#"<span id="eye">👁️</span>"#);
    let eye = doc.get_element_by_id("eye").unwrap();
    resumekit_web::toggle_password("nope", &eye);
    assert_eq!(glyph(&doc), "👁️");
}

#[wasm_bindgen_test]
fn exported_toggle_reveals_named_input() {
    let doc = mount(MARKUP);
    let eye = doc.get_element_by_id("eye").unwrap();
    resumekit_web::toggle_password("password1", &eye);
    assert_eq!(field_type(&doc), "text");
    resumekit_web::toggle_password("password1", &eye);
    assert_eq!(field_type(&doc), "password");
}
