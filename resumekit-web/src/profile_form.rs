use crate::dom;
use crate::notify::Notifier;
use resumekit_core::{FieldAccess, FormEditToggle, SiteConfig, is_toggled_field};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element};

#[derive(Clone)]
struct EditControls {
    form: Element,
    edit: Element,
    save: Element,
    upload_id: String,
}

impl EditControls {
    fn apply(&self, access: FieldAccess) -> Result<(), JsValue> {
        let fields = self.form.query_selector_all("input, textarea")?;
        for idx in 0..fields.length() {
            let Some(field) = fields.item(idx).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            if is_toggled_field(&field.id(), &self.upload_id) {
                dom::set_disabled(&field, access.fields_disabled);
            }
        }
        dom::set_disabled(&self.save, access.save_disabled);
        dom::set_disabled(&self.edit, access.edit_disabled);
        Ok(())
    }
}

/// Wire the profile form's edit and save buttons. The form starts read-only.
///
/// Returns the shared toggle so callers can observe the current mode, or
/// `None` when the page has no profile form.
///
/// # Errors
/// Returns an error if the initial state cannot be applied or a listener cannot be bound.
pub fn attach(
    doc: &Document,
    config: &SiteConfig,
    notifier: &Notifier,
) -> Result<Option<Rc<RefCell<FormEditToggle>>>, JsValue> {
    let ids = &config.ids;
    let (Some(edit), Some(save), Some(form)) = (
        doc.get_element_by_id(&ids.edit_button),
        doc.get_element_by_id(&ids.save_button),
        doc.get_element_by_id(&ids.profile_form),
    ) else {
        log::debug!("No profile edit controls on this page");
        return Ok(None);
    };

    let controls = EditControls {
        form,
        edit,
        save,
        upload_id: ids.profile_upload.clone(),
    };
    let toggle = Rc::new(RefCell::new(FormEditToggle::new()));
    controls.apply(toggle.borrow().access())?;

    {
        let toggle = Rc::clone(&toggle);
        let target = controls.clone();
        dom::listen(&controls.edit, "click", move |_| {
            let Some(access) = toggle.borrow_mut().edit() else {
                return;
            };
            if let Err(err) = target.apply(access) {
                log::warn!("Enabling profile fields failed: {}", dom::js_error_message(&err));
            }
        })?;
    }

    {
        let toggle = Rc::clone(&toggle);
        let target = controls.clone();
        let doc = doc.clone();
        let notifier = notifier.clone();
        let message = config.messages.changes_saved.clone();
        dom::listen(&controls.save, "click", move |_| {
            let Some(access) = toggle.borrow_mut().save() else {
                return;
            };
            if let Err(err) = target.apply(access) {
                log::warn!("Locking profile fields failed: {}", dom::js_error_message(&err));
            }
            notifier.notify(&doc, &message);
        })?;
    }

    log::debug!("Profile form ready in {:?} mode", toggle.borrow().mode());
    Ok(Some(toggle))
}
