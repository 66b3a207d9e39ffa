//! Click wiring and visibility toggles for per-post comment sections.
//!
//! Toggles are pure DOM mutations keyed by post id; no network access.
//! Listener bookkeeping keeps the registered closure per button so detach
//! removes exactly the handler that was attached.

use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlButtonElement};

use crate::model::PostId;
use crate::render::{HIDE_CLASS, HIDE_COMMENTS_LABEL, POST_ID_ATTR, SHOW_COMMENTS_LABEL};

/// Flip visibility of the comment section tagged with `post_id`.
///
/// `None` when no such section exists in the document.
pub fn toggle_comment_section(document: &Document, post_id: PostId) -> Option<Element> {
    let selector = format!("section[{POST_ID_ATTR}=\"{post_id}\"]");
    let section = document.query_selector(&selector).ok().flatten()?;
    let _ = section.class_list().toggle(HIDE_CLASS);
    Some(section)
}

/// Flip the label of the toggle button tagged with `post_id`.
///
/// The flip is keyed on the current label alone, not on the section's actual
/// visibility. `None` when no such button exists.
pub fn toggle_comment_button(document: &Document, post_id: PostId) -> Option<Element> {
    let selector = format!("button[{POST_ID_ATTR}=\"{post_id}\"]");
    let button = document.query_selector(&selector).ok().flatten()?;
    let current = button.text_content().unwrap_or_default();
    button.set_text_content(Some(next_button_label(&current)));
    Some(button)
}

/// Toggle both halves of one post's comment UI.
pub fn toggle_comments(document: &Document, post_id: PostId) -> (Option<Element>, Option<Element>) {
    (
        toggle_comment_section(document, post_id),
        toggle_comment_button(document, post_id),
    )
}

/// The label a toggle button flips to from `current`.
pub(crate) fn next_button_label(current: &str) -> &'static str {
    if current == SHOW_COMMENTS_LABEL {
        HIDE_COMMENTS_LABEL
    } else {
        SHOW_COMMENTS_LABEL
    }
}

/// Live click handlers for the toggle buttons under the main content area.
///
/// Each binding keeps the exact [`Closure`] it registered;
/// `removeEventListener` only detaches the closure instance that was added,
/// so dropping a binding removes precisely that handler and at most one
/// handler per button is ever live.
#[derive(Default)]
pub struct CommentToggles {
    bindings: Vec<ToggleBinding>,
}

struct ToggleBinding {
    button: HtmlButtonElement,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for ToggleBinding {
    fn drop(&mut self) {
        let _ = self
            .button
            .remove_event_listener_with_callback("click", self.closure.as_ref().unchecked_ref());
    }
}

impl CommentToggles {
    /// Attach a click handler to every `button[data-post-id]` under `main`.
    ///
    /// Buttons without a parseable post id are skipped.
    pub fn attach(document: &Document, main: &Element) -> Result<Self, JsValue> {
        let buttons = main.query_selector_all(&format!("button[{POST_ID_ATTR}]"))?;
        let mut bindings = Vec::with_capacity(buttons.length() as usize);
        for index in 0..buttons.length() {
            let Some(button) = buttons
                .item(index)
                .and_then(|node| node.dyn_into::<HtmlButtonElement>().ok())
            else {
                continue;
            };
            let Some(post_id) = button
                .get_attribute(POST_ID_ATTR)
                .and_then(|raw| raw.parse::<PostId>().ok())
            else {
                continue;
            };

            let handler_document = document.clone();
            let closure: Closure<dyn FnMut(Event)> = Closure::new(move |_event: Event| {
                toggle_comments(&handler_document, post_id);
            });
            button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            bindings.push(ToggleBinding { button, closure });
        }
        Ok(CommentToggles { bindings })
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Drop every binding, removing its click handler.
    pub fn detach(&mut self) {
        self.bindings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_flips_and_restores() {
        let flipped = next_button_label(SHOW_COMMENTS_LABEL);
        assert_eq!(flipped, HIDE_COMMENTS_LABEL);
        assert_eq!(next_button_label(flipped), SHOW_COMMENTS_LABEL);
    }

    #[test]
    fn unknown_label_resets_to_show() {
        assert_eq!(next_button_label(""), SHOW_COMMENTS_LABEL);
        assert_eq!(next_button_label("Comments"), SHOW_COMMENTS_LABEL);
    }
}
