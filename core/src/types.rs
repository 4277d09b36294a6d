//! Feed entities.
//!
//! # Design
//! Both records derive `Eq` and `Hash` over every field: a `Post` is used as
//! a map key by full structural identity, not just by `id`. Field names
//! follow Rust conventions; serde renames them to the API's camelCase.
//! These types mirror the mock-server's schema but are defined
//! independently, so integration tests catch schema drift.

use serde::{Deserialize, Serialize};

/// A post returned by `GET /posts`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub body: String,
}

impl Post {
    pub fn new(id: i64, user_id: i64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A comment returned by `GET /comments`. `post_id` references `Post::id`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub post_id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

impl Comment {
    pub fn new(
        id: i64,
        post_id: i64,
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            id,
            post_id,
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }
}
