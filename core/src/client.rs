//! Stateless HTTP request builder and response parser for the feed API.
//!
//! # Design
//! `FeedClient` holds only a `base_url` and carries no mutable state between
//! calls. Each resource has a `build_*` method that produces an `HttpRequest`
//! and a `parse_*` method that consumes an `HttpResponse`. Whoever executes
//! the round-trip in between is free to be a real socket or a canned value.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ApiError, TransportError};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Comment, Post};

/// Public jsonplaceholder instance that serves the full collections.
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Synchronous, stateless client for the feed API.
#[derive(Debug, Clone)]
pub struct FeedClient {
    base_url: String,
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl FeedClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_posts(&self) -> HttpRequest {
        self.get("posts")
    }

    pub fn build_list_comments(&self) -> HttpRequest {
        self.get("comments")
    }

    pub fn parse_list_posts(&self, response: HttpResponse) -> Result<Vec<Post>, ApiError> {
        let posts: Vec<Post> = parse_json(response)?;
        debug!(count = posts.len(), "parsed posts");
        Ok(posts)
    }

    pub fn parse_list_comments(&self, response: HttpResponse) -> Result<Vec<Comment>, ApiError> {
        let comments: Vec<Comment> = parse_json(response)?;
        debug!(count = comments.len(), "parsed comments");
        Ok(comments)
    }

    fn get(&self, resource: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}/{resource}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

/// Anything but 200 is reported with the raw status and body.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(TransportError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}
