use crate::support::{click, fast_config, is_disabled, mount, popup_texts, sleep_ms};
use resumekit_core::EditMode;
use resumekit_web::notify::Notifier;
use resumekit_web::{profile_form, profile_image};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{DataTransfer, Document, File, FilePropertyBag, HtmlInputElement};

const PICTURE: &str = r#"
    <img id="profileImage" src="data:image/png;base64,AAAA" data-default="/static/img/default.png">
    <input id="profileUpload" type="file">
    <button id="profileChange">Change</button>
    <a id="profileRemove" href="javascript:void(0)">Remove</a>
"#;

const PROFILE_FORM: &str = r#"
    <form id="profile-form">
        <input id="full_name" value="Ann">
        <textarea id="summary">Hi</textarea>
        <input id="profileUpload" name="profile_pic" type="file">
        <button type="button" id="edit-btn">Edit</button>
        <button type="button" id="save-btn">Save</button>
    </form>
"#;

#[wasm_bindgen_test]
fn remove_restores_exact_default_and_confirms() {
    let doc = mount(PICTURE);
    let config = fast_config();
    profile_image::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    click(&doc, "profileRemove");
    let image = doc.get_element_by_id("profileImage").unwrap();
    assert_eq!(
        image.get_attribute("src").as_deref(),
        Some("/static/img/default.png")
    );
    let upload: HtmlInputElement = doc
        .get_element_by_id("profileUpload")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(upload.value(), "");
    assert_eq!(popup_texts(&doc), vec!["Profile picture reset to default."]);
}

#[wasm_bindgen_test]
fn change_without_selection_leaves_preview() {
    let doc = mount(PICTURE);
    let config = fast_config();
    profile_image::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    let upload = doc.get_element_by_id("profileUpload").unwrap();
    let event = web_sys::Event::new("change").unwrap();
    upload.dispatch_event(&event).unwrap();
    let image = doc.get_element_by_id("profileImage").unwrap();
    assert_eq!(
        image.get_attribute("src").as_deref(),
        Some("data:image/png;base64,AAAA")
    );
}

// "hello" as base64
const PICTURE_DATA_URL: &str = "data:image/png;base64,aGVsbG8=";

/// Put a small png file into `#profileUpload` and fire `change`.
fn select_picture(doc: &Document) {
    let input: HtmlInputElement = doc
        .get_element_by_id("profileUpload")
        .unwrap()
        .dyn_into()
        .unwrap();
    let options = FilePropertyBag::new();
    options.set_type("image/png");
    let bits = js_sys::Array::of1(&JsValue::from_str("hello"));
    let file = File::new_with_str_sequence_and_options(&bits, "me.png", &options).unwrap();
    let transfer = DataTransfer::new().unwrap();
    transfer.items().add_with_file(&file).unwrap();
    input.set_files(transfer.files().as_ref());
    input
        .dispatch_event(&web_sys::Event::new("change").unwrap())
        .unwrap();
}

async fn src_once_loaded(doc: &Document, id: &str) -> Option<String> {
    for _ in 0..40 {
        let src = doc.get_element_by_id(id).and_then(|img| img.get_attribute("src"));
        if src.as_deref() == Some(PICTURE_DATA_URL) {
            return src;
        }
        sleep_ms(25).await;
    }
    doc.get_element_by_id(id).and_then(|img| img.get_attribute("src"))
}

#[wasm_bindgen_test]
async fn selected_picture_becomes_preview() {
    let doc = mount(PICTURE);
    let config = fast_config();
    profile_image::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    select_picture(&doc);
    assert_eq!(
        src_once_loaded(&doc, "profileImage").await.as_deref(),
        Some(PICTURE_DATA_URL)
    );
}

#[wasm_bindgen_test]
async fn remove_during_read_keeps_default() {
    let doc = mount(PICTURE);
    let config = fast_config();
    profile_image::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();

    select_picture(&doc);
    click(&doc, "profileRemove");
    sleep_ms(150).await;
    let image = doc.get_element_by_id("profileImage").unwrap();
    assert_eq!(
        image.get_attribute("src").as_deref(),
        Some("/static/img/default.png")
    );
}

#[wasm_bindgen_test]
async fn resume_picture_is_previewed() {
    let doc = mount(PROFILE_FORM);
    profile_image::attach_resume_preview(&doc, &fast_config()).unwrap();

    select_picture(&doc);
    assert_eq!(
        src_once_loaded(&doc, "resume-pic-preview").await.as_deref(),
        Some(PICTURE_DATA_URL)
    );
}

#[wasm_bindgen_test]
fn resume_preview_is_inserted_once_after_input() {
    let doc = mount(PROFILE_FORM);
    let config = fast_config();
    profile_image::attach_resume_preview(&doc, &config).unwrap();
    profile_image::attach_resume_preview(&doc, &config).unwrap();

    let previews = doc.query_selector_all("#resume-pic-preview").unwrap();
    assert_eq!(previews.length(), 1);
    let upload = doc.get_element_by_id("profileUpload").unwrap();
    let sibling = upload.next_element_sibling().expect("preview follows input");
    assert_eq!(sibling.id(), "resume-pic-preview");
    assert_eq!(sibling.get_attribute("alt").as_deref(), Some("Preview"));
}

#[wasm_bindgen_test]
fn edit_and_save_flip_every_field_but_upload() {
    let doc = mount(PROFILE_FORM);
    let config = fast_config();
    let toggle = profile_form::attach(&doc, &config, &Notifier::from_config(&config))
        .unwrap()
        .expect("profile form present");

    assert!(is_disabled(&doc, "full_name"));
    assert!(is_disabled(&doc, "summary"));
    assert!(!is_disabled(&doc, "profileUpload"));
    assert!(is_disabled(&doc, "save-btn"));

    click(&doc, "edit-btn");
    assert_eq!(toggle.borrow().mode(), EditMode::Editable);
    assert!(!is_disabled(&doc, "full_name"));
    assert!(!is_disabled(&doc, "summary"));
    assert!(is_disabled(&doc, "edit-btn"));
    assert!(!is_disabled(&doc, "save-btn"));

    click(&doc, "save-btn");
    assert_eq!(toggle.borrow().mode(), EditMode::ReadOnly);
    assert!(is_disabled(&doc, "full_name"));
    assert!(!is_disabled(&doc, "edit-btn"));
    assert!(!is_disabled(&doc, "profileUpload"));
    assert_eq!(popup_texts(&doc), vec!["Changes have been saved."]);
}

#[wasm_bindgen_test]
fn profile_form_absent_is_skipped() {
    let doc = mount("<div></div>");
    let config = fast_config();
    let toggle = profile_form::attach(&doc, &config, &Notifier::from_config(&config)).unwrap();
    assert!(toggle.is_none());
}

#[wasm_bindgen_test]
fn disabled_flag_falls_back_to_attribute() {
    let doc = mount(r#"<fieldset id="group"></fieldset><div id="plain"></div>"#);
    for id in ["group", "plain"] {
        let el = doc.get_element_by_id(id).unwrap();
        resumekit_web::dom::set_disabled(&el, true);
        assert!(is_disabled(&doc, id));
        resumekit_web::dom::set_disabled(&el, false);
        assert!(!is_disabled(&doc, id));
    }
}
