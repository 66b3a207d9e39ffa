//! Wire records consumed from the remote API.
//!
//! Everything here mirrors remote JSON read-only; no DOM or network
//! dependencies, so this module tests natively.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Identifies a user record on the remote API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(UserId)
    }
}

/// Identifies a post. Correlates a rendered article with its toggle button
/// and its comment section via the `data-post-id` attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for PostId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(PostId)
    }
}

/// A user's employer, as embedded in the user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    #[serde(rename = "catchPhrase")]
    pub catch_phrase: String,
}

/// One user record from `GET /users` or `GET /users/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub company: Company,
}

/// One post record from `GET /users/{id}/posts`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub user_id: UserId,
    pub title: String,
    pub body: String,
}

/// One comment record from `GET /posts/{id}/comments`.
///
/// The owning post is not stored on the comment; association is contextual,
/// scoped to the single fetch that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Outcome of a remote read or a guarded operation.
///
/// Callers need three distinct "nothing" signals, so this is an explicit
/// variant type instead of conflated optionals: `Skipped` (the request was
/// never issued), `Failed` (it was issued and died; diagnostics already went
/// to the console) and `Ready` with a payload that may still be empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fetched<T> {
    /// The request was never issued.
    Skipped,
    /// The request failed; the failure was logged where it happened.
    Failed,
    /// A usable payload.
    Ready(T),
}

impl<T> Fetched<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Fetched::Ready(_))
    }

    /// The payload, discarding which kind of "nothing" this was.
    pub fn ready(self) -> Option<T> {
        match self {
            Fetched::Ready(value) => Some(value),
            Fetched::Skipped | Fetched::Failed => None,
        }
    }
}

impl<T> Fetched<Vec<T>> {
    /// Borrow the payload as a slice, keeping the variant.
    pub fn as_deref(&self) -> Fetched<&[T]> {
        match self {
            Fetched::Skipped => Fetched::Skipped,
            Fetched::Failed => Fetched::Failed,
            Fetched::Ready(items) => Fetched::Ready(items.as_slice()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_record_from_wire_json() {
        let json = r#"{
            "id": 1,
            "name": "Leanne Graham",
            "username": "Bret",
            "email": "Sincere@april.biz",
            "company": {
                "name": "Romaguera-Crona",
                "catchPhrase": "Multi-layered client-server neural-net",
                "bs": "harness real-time e-markets"
            }
        }"#;

        let user: User = serde_json::from_str(json).unwrap();
        assert_eq!(user.id, UserId(1));
        assert_eq!(user.name, "Leanne Graham");
        assert_eq!(user.company.name, "Romaguera-Crona");
        assert_eq!(
            user.company.catch_phrase,
            "Multi-layered client-server neural-net"
        );
    }

    #[test]
    fn post_record_maps_camel_case_owner() {
        let json = r#"{
            "userId": 2,
            "id": 11,
            "title": "et ea vero quia laudantium autem",
            "body": "delectus reiciendis molestiae occaecati"
        }"#;

        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.id, PostId(11));
        assert_eq!(post.user_id, UserId(2));
        assert_eq!(post.title, "et ea vero quia laudantium autem");
    }

    #[test]
    fn comment_record_ignores_contextual_fields() {
        // `postId` and `id` arrive on the wire but the association is
        // contextual; the record keeps only author name, email and body.
        let json = r#"{
            "postId": 11,
            "id": 55,
            "name": "quibusdam sunt",
            "email": "Jeramy@raoul.biz",
            "body": "qui sunt commodi"
        }"#;

        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.name, "quibusdam sunt");
        assert_eq!(comment.email, "Jeramy@raoul.biz");
        assert_eq!(comment.body, "qui sunt commodi");
    }

    #[test]
    fn fetched_keeps_three_nothings_distinct() {
        let skipped: Fetched<Vec<Post>> = Fetched::Skipped;
        let failed: Fetched<Vec<Post>> = Fetched::Failed;
        let empty: Fetched<Vec<Post>> = Fetched::Ready(Vec::new());

        assert_ne!(skipped, failed);
        assert_ne!(failed, empty);
        assert_ne!(skipped, empty);

        assert!(!skipped.is_ready());
        assert!(!failed.is_ready());
        assert!(empty.is_ready());
        assert_eq!(empty.ready(), Some(Vec::new()));
    }

    #[test]
    fn fetched_as_deref_keeps_variant() {
        let failed: Fetched<Vec<Comment>> = Fetched::Failed;
        assert_eq!(failed.as_deref(), Fetched::Failed);

        let ready = Fetched::Ready(vec![PostId(1), PostId(2)]);
        assert_eq!(ready.as_deref(), Fetched::Ready(&[PostId(1), PostId(2)][..]));
    }

    #[test]
    fn post_id_round_trips_through_attribute_text() {
        let id = PostId(7);
        assert_eq!(id.to_string(), "7");
        assert_eq!("7".parse::<PostId>().unwrap(), id);
        assert!("".parse::<PostId>().is_err());
    }
}
