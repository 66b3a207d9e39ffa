//! Page bootstrap and the refresh cycle.
//!
//! Owns the employee select control, the main content region and the live
//! click bindings. Everything is threaded through one handle instead of
//! module-level globals, scoped to the page's lifetime.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, HtmlSelectElement};
use zoon::{Task, eprintln};

use crate::api::ApiClient;
use crate::io::events::CommentToggles;
use crate::model::{Fetched, Post, UserId};
use crate::render;
use crate::render::posts::{BuildError, posts_fragment};

/// Selector for the select control the host page must provide.
static SELECT_MENU_SELECTOR: &str = "#selectMenu";
/// Fallback employee when the select control has no usable value.
static DEFAULT_USER_ID: UserId = UserId(1);

/// Why the page could not be mounted or refreshed.
#[derive(Debug, Error)]
pub enum PageError {
    /// Not running inside a browser document.
    #[error("host document is unavailable")]
    NoDocument,
    /// The host page has no `#selectMenu` select control.
    #[error("select control #selectMenu not found")]
    SelectMissing,
    /// The host page has no `<main>` content region.
    #[error("main content region not found")]
    MainMissing,
    /// A post fragment could not be completed.
    #[error(transparent)]
    Build(#[from] BuildError),
    /// The host document refused a DOM operation.
    #[error("document operation failed: {0:?}")]
    Dom(JsValue),
}

impl From<JsValue> for PageError {
    fn from(value: JsValue) -> Self {
        PageError::Dom(value)
    }
}

/// Handle to the mounted page.
///
/// Cloning shares the same live state; the change listener keeps one clone
/// for as long as the page exists.
pub struct Page {
    inner: Rc<PageInner>,
}

impl Clone for Page {
    fn clone(&self) -> Self {
        Page { inner: Rc::clone(&self.inner) }
    }
}

struct PageInner {
    api: ApiClient,
    document: Document,
    select: HtmlSelectElement,
    main: Element,
    toggles: RefCell<CommentToggles>,
    change_listener: RefCell<Option<Closure<dyn FnMut(Event)>>>,
}

impl Page {
    /// Mount on the host document: resolve the select control and the main
    /// region, populate the select with one option per user and wire its
    /// change event.
    pub async fn boot(api: ApiClient) -> Result<Page, PageError> {
        let document = web_sys::window()
            .and_then(|window| window.document())
            .ok_or(PageError::NoDocument)?;
        let select: HtmlSelectElement = document
            .query_selector(SELECT_MENU_SELECTOR)?
            .ok_or(PageError::SelectMissing)?
            .dyn_into()
            .map_err(|_| PageError::SelectMissing)?;
        let main = document.query_selector("main")?.ok_or(PageError::MainMissing)?;

        let page = Page {
            inner: Rc::new(PageInner {
                api,
                document,
                select,
                main,
                toggles: RefCell::new(CommentToggles::default()),
                change_listener: RefCell::new(None),
            }),
        };
        page.populate_select_menu().await?;
        page.wire_change_listener()?;
        Ok(page)
    }

    /// Run the refresh cycle for `posts` against this page's main region.
    pub async fn refresh(&self, posts: Fetched<Vec<Post>>) -> Result<(), PageError> {
        let mut toggles = std::mem::take(&mut *self.inner.toggles.borrow_mut());
        let result = refresh_main(
            &self.inner.document,
            &self.inner.api,
            &self.inner.main,
            &mut toggles,
            posts,
        )
        .await;
        *self.inner.toggles.borrow_mut() = toggles;
        result
    }

    /// Fetch all users and append one option per user to the select control.
    /// A failed fetch leaves the control empty; the failure is already logged.
    async fn populate_select_menu(&self) -> Result<(), PageError> {
        let users = self.inner.api.users().await;
        let options = render::create_select_options(&self.inner.document, users.as_deref())?;
        if let Fetched::Ready(options) = options {
            for option in options {
                self.inner.select.append_child(&option)?;
            }
        }
        Ok(())
    }

    fn wire_change_listener(&self) -> Result<(), PageError> {
        let page = self.clone();
        let closure: Closure<dyn FnMut(Event)> = Closure::new(move |_event: Event| {
            page.on_select_change();
        });
        self.inner
            .select
            .add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        *self.inner.change_listener.borrow_mut() = Some(closure);
        Ok(())
    }

    /// Handle one change event: disable the control, refresh for the chosen
    /// employee and re-enable only after the refresh has fully completed.
    fn on_select_change(&self) {
        let page = self.clone();
        page.inner.select.set_disabled(true);
        Task::start(async move {
            let user_id = page.selected_user_id().unwrap_or(DEFAULT_USER_ID);
            let posts = page.inner.api.user_posts(user_id).await;
            if let Err(error) = page.refresh(posts).await {
                eprintln!("refresh for user {user_id} failed: {error}");
            }
            page.inner.select.set_disabled(false);
        });
    }

    /// The employee currently chosen in the select control, if any.
    fn selected_user_id(&self) -> Option<UserId> {
        let value = self.inner.select.value();
        if value.is_empty() {
            return None;
        }
        value.parse().ok()
    }
}

/// The refresh cycle, strictly ordered: detach the old click bindings, clear
/// `main`, rebuild its content, reattach fresh bindings.
///
/// `Skipped` input is a no-op that leaves the page untouched. `Failed` input
/// renders the placeholder paragraph. `Ready` input renders the full post
/// fragment; an empty list yields zero articles. This is the only place the
/// main region is mutated wholesale.
pub async fn refresh_main(
    document: &Document,
    api: &ApiClient,
    main: &Element,
    toggles: &mut CommentToggles,
    posts: Fetched<Vec<Post>>,
) -> Result<(), PageError> {
    let posts = match posts {
        Fetched::Skipped => return Ok(()),
        Fetched::Failed => None,
        Fetched::Ready(posts) => Some(posts),
    };

    toggles.detach();
    delete_child_elements(main);

    match posts {
        Some(posts) => {
            let fragment = posts_fragment(document, api, &posts).await?;
            main.append_child(&fragment)?;
        }
        None => {
            main.append_child(&render::placeholder(document)?)?;
        }
    }

    *toggles = CommentToggles::attach(document, main)?;
    Ok(())
}

/// Remove every element child of `parent`; a no-op when it has none.
pub fn delete_child_elements(parent: &Element) {
    while let Some(child) = parent.last_element_child() {
        let _ = parent.remove_child(&child);
    }
}
