//! Employee post browser.
//!
//! Fetches users, their posts and per-post comments from a remote JSON API
//! and renders them into the host page, with an expandable comment section
//! under every post.
//!
//! The host document provides the shell (a `select#selectMenu` control and
//! a `<main>` content region) and this crate only appends to and clears
//! those. Data flows one direction per interaction: selection change →
//! fetch posts → build a detached fragment (resolving each post's author and
//! comments inline) → replace main content → rebind the toggle buttons.

pub mod api;
pub mod io;
pub mod model;
pub mod page;
pub mod render;

pub use api::ApiClient;
pub use model::{Comment, Company, Fetched, Post, PostId, User, UserId};
pub use page::{Page, PageError};

use wasm_bindgen::prelude::*;
use zoon::eprintln;

/// Entry point, run once the wasm module is instantiated on a ready page.
///
/// Mount failures go to the console; there is no user-facing error UI.
#[wasm_bindgen(start)]
pub async fn start() {
    match Page::boot(ApiClient::default()).await {
        // The change listener holds its own handle, which keeps the page
        // state alive for the rest of the page's lifetime.
        Ok(_page) => {}
        Err(error) => eprintln!("page mount failed: {error}"),
    }
}
