use crate::support::{fast_config, mount, popup_texts, sleep_ms};
use resumekit_core::SiteConfig;
use resumekit_web::notify::Notifier;
use resumekit_web::signup::{self, SubmitOutcome};
use wasm_bindgen_test::*;
use web_sys::{Document, Event, EventInit};

fn signup_markup(name: &str, email: &str, pw1: &str, pw2: &str) -> String {
    format!(
        r#"<form id="signup-form" action="javascript:void(0)">
            <input id="name" value="{name}">
            <input id="email" value="{email}">
            <input id="password1" type="password" value="{pw1}">
            <input id="password2" type="password" value="{pw2}">
        </form>"#
    )
}

fn submit(doc: &Document) -> bool {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    doc.get_element_by_id("signup-form")
        .unwrap()
        .dispatch_event(&event)
        .unwrap()
}

#[wasm_bindgen_test]
fn valid_form_passes_checks() {
    let doc = mount(&signup_markup("Ann", "a@b.c", "Abcdef1!", "Abcdef1!"));
    assert_eq!(
        signup::check_form(&doc, &SiteConfig::default().ids),
        SubmitOutcome::Submitted
    );
}

/// The signup form inside an open `<dialog>` with `method="dialog"`, so a
/// native submission closes the dialog instead of navigating.
fn dialog_markup(name: &str, pw1: &str) -> String {
    format!(
        r#"<dialog id="host" open>
            <form id="signup-form" method="dialog">
                <input id="name" value="{name}">
                <input id="email" value="a@b.c">
                <input id="password1" type="password" value="{pw1}">
                <input id="password2" type="password" value="{pw1}">
            </form>
        </dialog>"#
    )
}

fn dialog_open(doc: &Document) -> bool {
    doc.get_element_by_id("host").unwrap().has_attribute("open")
}

#[wasm_bindgen_test]
async fn valid_submit_goes_through_natively() {
    let doc = mount(&dialog_markup("Ann", "Abcdef1!"));
    let config = fast_config();
    signup::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    submit(&doc);
    sleep_ms(20).await;
    assert!(popup_texts(&doc).is_empty());
    assert!(!dialog_open(&doc), "form.submit() should close the dialog");
}

#[wasm_bindgen_test]
async fn rejected_submit_never_reaches_native_submission() {
    let doc = mount(&dialog_markup("Al", "Abcdef1!"));
    let config = fast_config();
    signup::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    submit(&doc);
    sleep_ms(20).await;
    assert_eq!(
        popup_texts(&doc),
        vec!["Name should contain minimum of 3 characters"]
    );
    assert!(dialog_open(&doc));
}

#[wasm_bindgen_test]
fn missing_uppercase_shows_one_popup_and_blocks_submit() {
    let doc = mount(&signup_markup("Ann", "a@b.c", "abcdef1!", "abcdef1!"));
    let config = fast_config();
    signup::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    let not_cancelled = submit(&doc);
    assert!(!not_cancelled, "default submission must be prevented");
    assert_eq!(popup_texts(&doc), vec!["Password needs an uppercase letter"]);
}

#[wasm_bindgen_test]
fn short_name_reports_before_anything_else() {
    let doc = mount(&signup_markup("Al", "", "", "mismatch"));
    let config = fast_config();
    signup::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    submit(&doc);
    assert_eq!(
        popup_texts(&doc),
        vec!["Name should contain minimum of 3 characters"]
    );
}

#[wasm_bindgen_test]
fn each_rejected_attempt_adds_exactly_one_popup() {
    let doc = mount(&signup_markup("Ann", "a@b.c", "Abcdef1!", "Abcdef1?"));
    let config = SiteConfig::default();
    signup::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    submit(&doc);
    submit(&doc);
    assert_eq!(
        popup_texts(&doc),
        vec!["Passwords must match", "Passwords must match"]
    );
}

#[wasm_bindgen_test]
fn page_without_signup_form_is_skipped() {
    let doc = mount("<p>no form here</p>");
    let config = SiteConfig::default();
    assert!(signup::attach(&doc, &config, &Notifier::default()).is_ok());
}
