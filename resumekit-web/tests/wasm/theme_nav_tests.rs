use crate::support::{click, mount};
use resumekit_core::{MemoryStore, SiteConfig, THEME_KEY, Theme};
use resumekit_web::{clock, nav, test_bridge, theme};
use wasm_bindgen_test::*;
use web_sys::Document;

fn root_theme(doc: &Document) -> Option<String> {
    doc.document_element()
        .and_then(|root| root.get_attribute(theme::THEME_ATTR))
}

#[wasm_bindgen_test]
fn saved_theme_is_applied_and_rotated() {
    let doc = mount(r#"<button id="themeToggle">Theme</button>"#);
    let store = MemoryStore::with_entry(THEME_KEY, "dark");
    let controller = theme::attach_with_store(&doc, &SiteConfig::default(), store).unwrap();
    assert_eq!(root_theme(&doc).as_deref(), Some("dark"));

    click(&doc, "themeToggle");
    assert_eq!(root_theme(&doc).as_deref(), Some("minimal"));
    click(&doc, "themeToggle");
    assert_eq!(root_theme(&doc).as_deref(), Some("light"));
    assert_eq!(controller.borrow().current(), Theme::Light);
    assert_eq!(controller.borrow().store().peek(THEME_KEY), Some("light"));
}

#[wasm_bindgen_test]
fn garbage_theme_falls_back_to_light_without_button() {
    let doc = mount("");
    let store = MemoryStore::with_entry(THEME_KEY, "neon");
    theme::attach_with_store(&doc, &SiteConfig::default(), store).unwrap();
    assert_eq!(root_theme(&doc).as_deref(), Some("light"));
}

#[wasm_bindgen_test]
fn nav_button_toggles_active_class() {
    let doc = mount(r#"<button id="navToggle">☰</button><ul id="navLinks"></ul>"#);
    nav::attach(&doc, &SiteConfig::default()).unwrap();
    let links = doc.get_element_by_id("navLinks").unwrap();

    click(&doc, "navToggle");
    assert!(links.class_list().contains("active"));
    click(&doc, "navToggle");
    assert!(!links.class_list().contains("active"));
}

#[wasm_bindgen_test]
fn clock_fills_datetime_element() {
    let doc = mount(r#"<span id="datetime"></span>"#);
    clock::attach(&doc, &SiteConfig::default()).unwrap();
    let text = doc
        .get_element_by_id("datetime")
        .unwrap()
        .text_content()
        .unwrap_or_default();
    assert!(!text.is_empty());
}

#[wasm_bindgen_test]
fn bridge_snapshot_reports_theme_and_popups() {
    let doc = mount(
        r#"<div class="flash-popup">x</div>
        <button id="edit-btn" disabled></button>"#,
    );
    let config = SiteConfig::default();
    theme::reflect(&doc, Theme::Minimal).unwrap();
    let state = test_bridge::snapshot(&doc, &config);
    assert_eq!(state.theme.as_deref(), Some("minimal"));
    assert_eq!(state.popups, 1);
    assert_eq!(state.editable, Some(true));
}
