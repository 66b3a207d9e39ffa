//! Post article markup and its sequential data resolution.

use thiserror::Error;
use wasm_bindgen::JsValue;
use web_sys::{Document, DocumentFragment, Element};

use super::comments::comment_section;
use super::{POST_ID_ATTR, SHOW_COMMENTS_LABEL, create_elem_with_text};
use crate::api::ApiClient;
use crate::model::{Fetched, Post, User, UserId};

/// Why a post fragment could not be completed.
#[derive(Debug, Error)]
pub enum BuildError {
    /// The author lookup came back unusable; the article cannot render its
    /// author line, which aborts the whole fragment.
    #[error("author {0} is unavailable")]
    AuthorUnavailable(UserId),
    /// The host document refused a DOM operation.
    #[error("document operation failed: {0:?}")]
    Dom(JsValue),
}

impl From<JsValue> for BuildError {
    fn from(value: JsValue) -> Self {
        BuildError::Dom(value)
    }
}

/// Assemble one post article from already-resolved data.
///
/// Child order: title, body, "Post ID: {id}", author line, the author's
/// catch-phrase, the toggle button, the comment section.
pub fn post_article(
    document: &Document,
    post: &Post,
    author: &User,
    section: &Element,
) -> Result<Element, JsValue> {
    let article = document.create_element("article")?;
    article.append_child(&create_elem_with_text(document, "h2", &post.title, None)?)?;
    article.append_child(&create_elem_with_text(document, "p", &post.body, None)?)?;
    article.append_child(&create_elem_with_text(
        document,
        "p",
        &format!("Post ID: {}", post.id),
        None,
    )?)?;
    article.append_child(&create_elem_with_text(
        document,
        "p",
        &format!("Author: {} with {}", author.name, author.company.name),
        None,
    )?)?;
    article.append_child(&create_elem_with_text(
        document,
        "p",
        &author.company.catch_phrase,
        None,
    )?)?;

    let button = create_elem_with_text(document, "button", SHOW_COMMENTS_LABEL, None)?;
    button.set_attribute(POST_ID_ATTR, &post.id.to_string())?;
    article.append_child(&button)?;
    article.append_child(section)?;
    Ok(article)
}

/// Build the detached fragment for `posts`.
///
/// Posts are resolved strictly in input order; each post's author fetch and
/// comment fetch complete before the next post starts. An empty slice yields
/// a fragment with zero articles.
pub async fn posts_fragment(
    document: &Document,
    api: &ApiClient,
    posts: &[Post],
) -> Result<DocumentFragment, BuildError> {
    let fragment = document.create_document_fragment();
    for post in posts {
        let author = match api.user(post.user_id).await {
            Fetched::Ready(author) => author,
            Fetched::Skipped | Fetched::Failed => {
                return Err(BuildError::AuthorUnavailable(post.user_id));
            }
        };
        let comments = api.post_comments(post.id).await;
        let section = comment_section(document, post.id, comments.as_deref())?;
        fragment.append_child(&post_article(document, post, &author, &section)?)?;
    }
    Ok(fragment)
}
