//! Password visibility toggle.
//!
//! The reveal state of a field lives on the input itself: its `type` says
//! whether it is masked, and two data attributes hold the current reveal
//! session and the pending re-mask timer. That lets the exported
//! `togglePassword(inputId, element)` work from inline markup handlers with
//! no Rust-side registry.

use crate::dom;
use resumekit_core::{
    PasswordReveal, RevealGlyphs, RevealState, RevealTransition, SiteConfig, timeout_ms,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement};

pub const SESSION_ATTR: &str = "data-reveal-session";
pub const TIMER_ATTR: &str = "data-reveal-timer";
/// Markup hook: `<span data-toggle-password="password1">`
pub const WIRE_ATTR: &str = "data-toggle-password";

fn read_reveal(input: &HtmlInputElement) -> PasswordReveal {
    let state = if input.type_() == "password" {
        RevealState::Masked
    } else {
        RevealState::Unmasked
    };
    let session = input
        .get_attribute(SESSION_ATTR)
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(0);
    PasswordReveal::resume(state, session)
}

fn cancel_pending(input: &HtmlInputElement) -> Result<(), JsValue> {
    if let Some(handle) = input
        .get_attribute(TIMER_ATTR)
        .and_then(|raw| raw.parse::<i32>().ok())
    {
        dom::clear_timeout(handle);
    }
    input.remove_attribute(TIMER_ATTR)
}

fn mask(input: &HtmlInputElement, toggle: &Element, glyphs: &RevealGlyphs) {
    input.set_type("password");
    toggle.set_text_content(Some(&glyphs.masked));
}

/// Flip the masking of `input_id`, updating `toggle`'s glyph.
///
/// A reveal schedules a re-mask after `reveal_ms`; a manual mask, or a newer
/// reveal, cancels any earlier pending re-mask. Missing inputs are ignored.
///
/// # Errors
/// Returns an error if attributes cannot be written or the timer cannot be scheduled.
pub fn toggle_password(
    doc: &Document,
    input_id: &str,
    toggle: &Element,
    glyphs: &RevealGlyphs,
    reveal_ms: i32,
) -> Result<(), JsValue> {
    let Some(input) = dom::element_by_id::<HtmlInputElement>(doc, input_id) else {
        return Ok(());
    };
    let mut reveal = read_reveal(&input);
    cancel_pending(&input)?;

    match reveal.toggle() {
        RevealTransition::Revealed(session) => {
            input.set_type("text");
            toggle.set_text_content(Some(&glyphs.unmasked));
            input.set_attribute(SESSION_ATTR, &reveal.session().to_string())?;

            let timer_input = input.clone();
            let timer_toggle = toggle.clone();
            let glyphs = glyphs.clone();
            let handle = dom::set_timeout(reveal_ms, move || {
                let mut current = read_reveal(&timer_input);
                if current.timer_fired(session) {
                    mask(&timer_input, &timer_toggle, &glyphs);
                    let _ = timer_input.remove_attribute(TIMER_ATTR);
                } else {
                    log::debug!("Ignoring stale re-mask for session {}", session.id());
                }
            })?;
            input.set_attribute(TIMER_ATTR, &handle.to_string())?;
        }
        RevealTransition::Masked { cancelled } => {
            log::trace!("Manual mask cancels session {}", cancelled.id());
            mask(&input, toggle, glyphs);
        }
    }
    Ok(())
}

/// Wire every element carrying [`WIRE_ATTR`] to toggle the input it names.
///
/// # Errors
/// Returns an error if the selector query or a listener registration fails.
pub fn attach(doc: &Document, config: &SiteConfig) -> Result<(), JsValue> {
    let toggles = doc.query_selector_all(&format!("[{WIRE_ATTR}]"))?;
    for idx in 0..toggles.length() {
        let Some(toggle) = toggles
            .item(idx)
            .and_then(|node| node.dyn_into::<Element>().ok())
        else {
            continue;
        };
        let Some(input_id) = toggle.get_attribute(WIRE_ATTR) else {
            continue;
        };
        let doc = doc.clone();
        let glyphs = config.glyphs.clone();
        let reveal_ms = timeout_ms(config.delays.reveal_ms);
        let target = toggle.clone();
        dom::listen(&toggle, "click", move |_| {
            if let Err(err) = toggle_password(&doc, &input_id, &target, &glyphs, reveal_ms) {
                log::warn!("Password toggle failed: {}", dom::js_error_message(&err));
            }
        })?;
    }
    Ok(())
}
