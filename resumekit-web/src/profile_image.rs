//! Profile picture preview, reset and the resume-form picture preview.

use crate::dom;
use crate::notify::Notifier;
use resumekit_core::{PreviewTracker, SiteConfig};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen::closure::Closure;
use web_sys::{Document, FileReader, HtmlImageElement, HtmlInputElement};

/// An image element fed by a file input
#[derive(Clone)]
pub struct PreviewTarget {
    image: HtmlImageElement,
    tracker: Rc<RefCell<PreviewTracker>>,
}

impl PreviewTarget {
    #[must_use]
    pub fn new(image: HtmlImageElement) -> Self {
        Self {
            image,
            tracker: Rc::new(RefCell::new(PreviewTracker::new())),
        }
    }

    #[must_use]
    pub const fn image(&self) -> &HtmlImageElement {
        &self.image
    }

    /// Start reading the first selected file of `input`. Older reads still in
    /// flight are superseded.
    ///
    /// # Errors
    /// Returns an error if the reader cannot be created or started.
    pub fn load_from(&self, input: &HtmlInputElement) -> Result<(), JsValue> {
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return Ok(());
        };
        let token = self.tracker.borrow_mut().select();
        let reader = FileReader::new()?;

        let done_reader = reader.clone();
        let target = self.clone();
        let on_done = Closure::once_into_js(move || {
            let Some(data_url) = done_reader.result().ok().and_then(|v| v.as_string()) else {
                log::warn!("Reading selected picture failed; keeping current preview");
                return;
            };
            if target.tracker.borrow_mut().complete(token) {
                target.image.set_src(&data_url);
            }
        });
        reader.set_onloadend(Some(on_done.unchecked_ref()));
        reader.read_as_data_url(&file)
    }

    /// Put back the image named by `default_attr` and forget any selection.
    pub fn reset(&self, default_attr: &str) -> String {
        self.tracker.borrow_mut().reset();
        let default_src = self.image.get_attribute(default_attr).unwrap_or_default();
        self.image.set_src(&default_src);
        default_src
    }
}

fn bind_picker(input: &HtmlInputElement, target: PreviewTarget) -> Result<(), JsValue> {
    let source = input.clone();
    dom::listen(input, "change", move |_| {
        if let Err(err) = target.load_from(&source) {
            log::warn!("Picture preview failed: {}", dom::js_error_message(&err));
        }
    })
}

/// Wire the profile page picture controls: change opens the picker, a
/// selection previews, remove resets to the default image.
///
/// # Errors
/// Returns an error if a listener cannot be bound.
pub fn attach(doc: &Document, config: &SiteConfig, notifier: &Notifier) -> Result<(), JsValue> {
    let ids = &config.ids;
    let image = dom::element_by_id::<HtmlImageElement>(doc, &ids.profile_image);
    let upload = dom::element_by_id::<HtmlInputElement>(doc, &ids.profile_upload);
    let (Some(image), Some(upload)) = (image, upload) else {
        log::debug!("No profile picture controls on this page");
        return Ok(());
    };
    let target = PreviewTarget::new(image);

    if let Some(change) = doc.get_element_by_id(&ids.profile_change) {
        let picker = upload.clone();
        dom::listen(&change, "click", move |_| picker.click())?;
        bind_picker(&upload, target.clone())?;
    }

    if let Some(remove) = doc.get_element_by_id(&ids.profile_remove) {
        let doc = doc.clone();
        let default_attr = config.default_source_attr.clone();
        let message = config.messages.picture_reset.clone();
        let notifier = notifier.clone();
        dom::listen(&remove, "click", move |event| {
            event.prevent_default();
            target.reset(&default_attr);
            upload.set_value("");
            notifier.notify(&doc, &message);
        })?;
    }
    Ok(())
}

/// Insert a preview image after the resume form's picture input, once.
///
/// # Errors
/// Returns an error if the input lookup, the image creation or the listener fails.
pub fn attach_resume_preview(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let Some(form) = doc.get_element_by_id(&config.ids.profile_form) else {
        return Ok(());
    };
    let selector = format!("input[name=\"{}\"]", config.upload_field_name);
    let Some(input) = form
        .query_selector(&selector)?
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    else {
        return Ok(());
    };
    if doc.get_element_by_id(&config.ids.resume_preview).is_some() {
        log::debug!("Resume preview already present");
        return Ok(());
    }

    let image = doc.create_element("img")?.dyn_into::<HtmlImageElement>()?;
    image.set_id(&config.ids.resume_preview);
    image.set_alt("Preview");
    let style = image.style();
    style.set_property("max-width", "120px")?;
    style.set_property("border-radius", "50%")?;
    style.set_property("margin", "10px 0")?;

    if let Some(parent) = input.parent_node() {
        parent.insert_before(&image, input.next_sibling().as_ref())?;
    }
    bind_picker(&input, PreviewTarget::new(image))
}
