use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, EventTarget, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
#[must_use]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Look up an element by id and cast it to the expected element type.
///
/// Returns `None` when the element is absent or has a different type, which
/// callers treat as "feature not on this page".
#[must_use]
pub fn element_by_id<T: JsCast>(doc: &Document, id: &str) -> Option<T> {
    doc.get_element_by_id(id)
        .and_then(|el| el.dyn_into::<T>().ok())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    web_sys::console::error_1(&JsValue::from(message));
}

/// Bind `handler` to `event` on `target` for the lifetime of the page.
///
/// # Errors
/// Returns an error if the browser refuses the listener registration.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Run `callback` once after `delay_ms`, returning the timer handle.
///
/// # Errors
/// Returns an error if no window is available or the timer cannot be scheduled.
pub fn set_timeout<F>(delay_ms: i32, callback: F) -> Result<i32, JsValue>
where
    F: FnOnce() + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let closure = Closure::once_into_js(callback);
    win.set_timeout_with_callback_and_timeout_and_arguments_0(closure.unchecked_ref(), delay_ms)
}

/// Cancel a timer scheduled with [`set_timeout`]. Unknown handles are ignored.
pub fn clear_timeout(handle: i32) {
    if let Some(win) = window() {
        win.clear_timeout_with_handle(handle);
    }
}

/// Run `callback` every `period_ms` for the lifetime of the page.
///
/// # Errors
/// Returns an error if no window is available or the interval cannot be scheduled.
pub fn set_interval<F>(period_ms: i32, callback: F) -> Result<i32, JsValue>
where
    F: FnMut() + 'static,
{
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let closure = Closure::<dyn FnMut()>::new(callback);
    let handle = win.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        period_ms,
    )?;
    closure.forget();
    Ok(handle)
}

/// Set or clear the `disabled` flag on a form control.
///
/// Buttons, inputs and text areas use their `disabled` property; any other
/// element gets the attribute toggled.
pub fn set_disabled(el: &Element, disabled: bool) {
    if let Some(button) = el.dyn_ref::<web_sys::HtmlButtonElement>() {
        button.set_disabled(disabled);
    } else if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.set_disabled(disabled);
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.set_disabled(disabled);
    } else {
        let result = if disabled {
            el.set_attribute("disabled", "")
        } else {
            el.remove_attribute("disabled")
        };
        if let Err(err) = result {
            log::warn!(
                "Could not update disabled on #{}: {}",
                el.id(),
                js_error_message(&err)
            );
        }
    }
}

/// Read the current value of a text-like form control, empty when absent.
#[must_use]
pub fn field_value(doc: &Document, id: &str) -> String {
    let Some(el) = doc.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
        input.value()
    } else if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error if the browser window cannot be accessed or `localStorage` is unavailable.
pub fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("window unavailable"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Run `f` once the document has been parsed.
///
/// # Errors
/// Returns an error if the `DOMContentLoaded` listener cannot be registered.
pub fn on_ready<F>(doc: &Document, f: F) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }
    let closure = Closure::once_into_js(f);
    doc.add_event_listener_with_callback("DOMContentLoaded", closure.unchecked_ref())
}
