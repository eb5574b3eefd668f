use crate::support::{click, mount, popup_texts};
use js_sys::{Function, Reflect};
use resumekit_web::{dom, install_globals};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlInputElement;

fn global_fn(name: &str) -> Function {
    let win = dom::window().expect("window");
    Reflect::get(&win, &JsValue::from_str(name))
        .expect("property readable")
        .dyn_into::<Function>()
        .unwrap_or_else(|_| panic!("window.{name} is a function"))
}

#[wasm_bindgen_test]
fn inline_toggle_password_resolves_on_window() {
    let doc = mount(
        r#"<input id="password1" type="password" value="Secret1!">
        <span id="eye">👁️</span>"#,
    );
    install_globals().unwrap();
    let eye = doc.get_element_by_id("eye").unwrap();

    global_fn("togglePassword")
        .call2(&JsValue::NULL, &JsValue::from_str("password1"), &eye)
        .unwrap();
    let input: HtmlInputElement = doc
        .get_element_by_id("password1")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(input.type_(), "text");
    assert_eq!(eye.text_content().as_deref(), Some("🙈"));
}

#[wasm_bindgen_test]
fn inline_onclick_markup_reaches_popup() {
    let doc = mount(r#"<button id="hello" onclick="popup('Hello from markup')">Hi</button>"#);
    install_globals().unwrap();
    click(&doc, "hello");
    assert_eq!(popup_texts(&doc), vec!["Hello from markup"]);
}
