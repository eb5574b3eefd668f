use crate::dom;
use crate::notify::Notifier;
use resumekit_core::{ElementIds, SignupFields, SiteConfig, validate_signup};
use wasm_bindgen::JsValue;
use web_sys::{Document, HtmlFormElement};

/// Outcome of one submit attempt, exposed for tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Rejected(&'static str),
}

/// Validate the signup form as it currently stands.
#[must_use]
pub fn check_form(doc: &Document, ids: &ElementIds) -> SubmitOutcome {
    let name = dom::field_value(doc, &ids.name);
    let email = dom::field_value(doc, &ids.email);
    let password = dom::field_value(doc, &ids.password);
    let confirm = dom::field_value(doc, &ids.password_confirm);
    let fields = SignupFields {
        name: &name,
        email: &email,
        password: &password,
        confirm: &confirm,
    };
    match validate_signup(&fields) {
        Ok(()) => SubmitOutcome::Submitted,
        Err(failure) => SubmitOutcome::Rejected(failure.message()),
    }
}

/// Intercept submission of the signup form, showing one popup per rejected
/// attempt and submitting natively once every check passes.
///
/// # Errors
/// Returns an error if the submit listener cannot be bound.
pub fn attach(doc: &Document, config: &SiteConfig, notifier: &Notifier) -> Result<(), JsValue> {
    let Some(form) = dom::element_by_id::<HtmlFormElement>(doc, &config.ids.signup_form) else {
        log::debug!("No #{} on this page", config.ids.signup_form);
        return Ok(());
    };

    let doc = doc.clone();
    let ids = config.ids.clone();
    let notifier = notifier.clone();
    let target = form.clone();
    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        match check_form(&doc, &ids) {
            SubmitOutcome::Rejected(message) => notifier.notify(&doc, message),
            SubmitOutcome::Submitted => {
                // `submit()` does not re-dispatch the submit event
                if let Err(err) = target.submit() {
                    log::error!("Signup submission failed: {}", dom::js_error_message(&err));
                }
            }
        }
    })
}
