//! Comment section markup.

use wasm_bindgen::JsValue;
use web_sys::{Document, DocumentFragment, Element};

use super::{COMMENTS_CLASS, HIDE_CLASS, POST_ID_ATTR, create_elem_with_text};
use crate::model::{Comment, Fetched, PostId};

/// One detached `<article>` per comment, in input order: heading with the
/// commenter's name, the comment body, then "From: {email}".
pub fn comments_fragment(
    document: &Document,
    comments: &[Comment],
) -> Result<DocumentFragment, JsValue> {
    let fragment = document.create_document_fragment();
    for comment in comments {
        let article = document.create_element("article")?;
        article.append_child(&create_elem_with_text(document, "h3", &comment.name, None)?)?;
        article.append_child(&create_elem_with_text(document, "p", &comment.body, None)?)?;
        article.append_child(&create_elem_with_text(
            document,
            "p",
            &format!("From: {}", comment.email),
            None,
        )?)?;
        fragment.append_child(&article)?;
    }
    Ok(fragment)
}

/// The initially-hidden comment section for one post, tagged with the post id
/// so the matching toggle button can find it.
///
/// A failed comment fetch leaves the section empty; the failure was already
/// logged at the client boundary.
pub fn comment_section(
    document: &Document,
    post_id: PostId,
    comments: Fetched<&[Comment]>,
) -> Result<Element, JsValue> {
    let section = document.create_element("section")?;
    section.set_attribute(POST_ID_ATTR, &post_id.to_string())?;
    section.class_list().add_2(COMMENTS_CLASS, HIDE_CLASS)?;
    if let Fetched::Ready(comments) = comments {
        section.append_child(&comments_fragment(document, comments)?)?;
    }
    Ok(section)
}
