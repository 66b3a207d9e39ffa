//! Read-only client for the remote JSON API.
//!
//! Four GET operations, all following the same shape: fetch, decode the body,
//! hand back the records. Failures never escape this module: each one is
//! logged once with the failing endpoint and the caller sees
//! [`Fetched::Failed`].

use serde::de::DeserializeOwned;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use zoon::eprintln;

use crate::model::{Comment, Fetched, Post, PostId, User, UserId};

/// Remote origin used by [`ApiClient::default`].
static API_ORIGIN: &str = "https://jsonplaceholder.typicode.com";

/// What went wrong talking to one endpoint. Internal: public operations
/// log these and resolve to [`Fetched::Failed`] instead of propagating.
#[derive(Debug, Error)]
enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("endpoint answered with status {0}")]
    Status(u16),
    #[error("response body did not decode: {0}")]
    Decode(String),
}

/// Read-only access to the user/post/comment endpoints of one origin.
#[derive(Clone, Debug)]
pub struct ApiClient {
    origin: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        ApiClient::new(API_ORIGIN)
    }
}

impl ApiClient {
    pub fn new(origin: impl Into<String>) -> Self {
        ApiClient { origin: origin.into() }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// `GET /users`: all user records.
    pub async fn users(&self) -> Fetched<Vec<User>> {
        self.get_json(&users_path()).await
    }

    /// `GET /users/{id}`: one user record.
    pub async fn user(&self, id: UserId) -> Fetched<User> {
        self.get_json(&user_path(id)).await
    }

    /// `GET /users/{id}/posts`: the posts belonging to one user.
    pub async fn user_posts(&self, id: UserId) -> Fetched<Vec<Post>> {
        self.get_json(&user_posts_path(id)).await
    }

    /// `GET /posts/{id}/comments`: the comments on one post.
    pub async fn post_comments(&self, id: PostId) -> Fetched<Vec<Comment>> {
        self.get_json(&post_comments_path(id)).await
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Fetched<T> {
        let url = self.url(path);
        match fetch_json(&url).await {
            Ok(value) => Fetched::Ready(value),
            Err(error) => {
                eprintln!("GET {url} failed: {error}");
                Fetched::Failed
            }
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }
}

fn users_path() -> String {
    "/users".to_owned()
}

fn user_path(id: UserId) -> String {
    format!("/users/{id}")
}

fn user_posts_path(id: UserId) -> String {
    format!("/users/{id}/posts")
}

fn post_comments_path(id: PostId) -> String {
    format!("/posts/{id}/comments")
}

/// One fetch → decode pass against `url`.
async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let window =
        web_sys::window().ok_or_else(|| FetchError::Transport("no window".to_owned()))?;

    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|error| FetchError::Transport(js_text(&error)))?
        .dyn_into()
        .map_err(|value| FetchError::Transport(js_text(&value)))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let body = JsFuture::from(
        response
            .json()
            .map_err(|error| FetchError::Decode(js_text(&error)))?,
    )
    .await
    .map_err(|error| FetchError::Decode(js_text(&error)))?;

    serde_wasm_bindgen::from_value(body).map_err(|error| FetchError::Decode(error.to_string()))
}

fn js_text(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_paths() {
        assert_eq!(users_path(), "/users");
        assert_eq!(user_path(UserId(2)), "/users/2");
        assert_eq!(user_posts_path(UserId(2)), "/users/2/posts");
        assert_eq!(post_comments_path(PostId(11)), "/posts/11/comments");
    }

    #[test]
    fn client_joins_origin_and_path() {
        let client = ApiClient::new("http://127.0.0.1:4010");
        assert_eq!(client.url(&user_posts_path(UserId(3))), "http://127.0.0.1:4010/users/3/posts");
    }

    #[test]
    fn default_client_targets_remote_origin() {
        assert_eq!(ApiClient::default().origin(), "https://jsonplaceholder.typicode.com");
    }
}
