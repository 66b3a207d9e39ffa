//! DOM construction for the page's content area.
//!
//! Builders return detached nodes; attachment into the live document happens
//! in [`crate::page`]. Shared markup vocabulary (classes, labels, the
//! correlating attribute) lives here so render and event code agree on it.

pub mod comments;
pub mod posts;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlOptionElement};

use crate::model::{Fetched, User};

/// Attribute correlating a post with its toggle button and comment section.
pub static POST_ID_ATTR: &str = "data-post-id";
/// Class marking a comment section.
pub static COMMENTS_CLASS: &str = "comments";
/// Class hiding an element; flipped by the per-post toggle.
pub static HIDE_CLASS: &str = "hide";
/// Label on a toggle button whose comment section is hidden.
pub static SHOW_COMMENTS_LABEL: &str = "Show Comments";
/// Label on a toggle button whose comment section is visible.
pub static HIDE_COMMENTS_LABEL: &str = "Hide Comments";
/// Class on the placeholder paragraph shown when no posts are rendered.
pub static DEFAULT_TEXT_CLASS: &str = "default-text";
/// Placeholder copy shown until an employee is selected.
pub static PLACEHOLDER_TEXT: &str = "Select an Employee to display their posts.";

/// Create a detached element of `tag` with its text content set.
///
/// `class`, when supplied, is added to the element's class set. Invalid tag
/// names surface the document's own error, unretried.
pub fn create_elem_with_text(
    document: &Document,
    tag: &str,
    text: &str,
    class: Option<&str>,
) -> Result<Element, JsValue> {
    let element = document.create_element(tag)?;
    element.set_text_content(Some(text));
    if let Some(class) = class {
        element.class_list().add_1(class)?;
    }
    Ok(element)
}

/// One detached `<option>` per user: value = user id, label = user name,
/// input order preserved. `Skipped`/`Failed` pass through without touching
/// the document.
pub fn create_select_options(
    document: &Document,
    users: Fetched<&[User]>,
) -> Result<Fetched<Vec<HtmlOptionElement>>, JsValue> {
    let users = match users {
        Fetched::Skipped => return Ok(Fetched::Skipped),
        Fetched::Failed => return Ok(Fetched::Failed),
        Fetched::Ready(users) => users,
    };

    let mut options = Vec::with_capacity(users.len());
    for user in users {
        let option: HtmlOptionElement = document.create_element("option")?.unchecked_into();
        option.set_value(&user.id.to_string());
        option.set_text_content(Some(&user.name));
        options.push(option);
    }
    Ok(Fetched::Ready(options))
}

/// The paragraph shown in place of posts when there is nothing to render.
pub fn placeholder(document: &Document) -> Result<Element, JsValue> {
    create_elem_with_text(document, "p", PLACEHOLDER_TEXT, Some(DEFAULT_TEXT_CLASS))
}
