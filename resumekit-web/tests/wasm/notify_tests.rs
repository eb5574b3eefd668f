use crate::support::{mount, popup_texts, sleep_ms};
use resumekit_web::notify::Notifier;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
async fn popups_stack_and_expire_independently() {
    let doc = mount("");
    let short = Notifier::new("flash-popup", 40);
    let long = Notifier::new("flash-popup", 200);
    short.show(&doc, "first").unwrap();
    short.show(&doc, "first").unwrap();
    long.show(&doc, "second").unwrap();
    assert_eq!(popup_texts(&doc), vec!["first", "first", "second"]);

    sleep_ms(100).await;
    assert_eq!(popup_texts(&doc), vec!["second"]);

    sleep_ms(150).await;
    assert!(popup_texts(&doc).is_empty());
}

#[wasm_bindgen_test]
fn exported_popup_uses_page_defaults() {
    let doc = mount("");
    resumekit_web::popup("Hello");
    assert_eq!(popup_texts(&doc), vec!["Hello"]);
}
