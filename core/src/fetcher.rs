//! Post and comment fetchers.
//!
//! # Design
//! The binder depends on the two traits, not on HTTP. `HttpFetcher`
//! implements both by pairing a `FeedClient` with a `Transport`: one
//! blocking GET per call, the whole collection in one response, no retry.

use crate::client::FeedClient;
use crate::error::ApiError;
use crate::transport::{Transport, UreqTransport};
use crate::types::{Comment, Post};

/// Source of the full post collection.
pub trait PostFetcher {
    fn fetch_posts(&self) -> Result<Vec<Post>, ApiError>;
}

/// Source of the full comment collection.
pub trait CommentFetcher {
    fn fetch_comments(&self) -> Result<Vec<Comment>, ApiError>;
}

impl<F: PostFetcher + ?Sized> PostFetcher for &F {
    fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        (**self).fetch_posts()
    }
}

impl<F: CommentFetcher + ?Sized> CommentFetcher for &F {
    fn fetch_comments(&self) -> Result<Vec<Comment>, ApiError> {
        (**self).fetch_comments()
    }
}

/// Fetches both resources from one base URL through a `Transport`.
#[derive(Debug, Clone)]
pub struct HttpFetcher<T = UreqTransport> {
    client: FeedClient,
    transport: T,
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::with_transport(FeedClient::default(), UreqTransport::new())
    }
}

impl HttpFetcher {
    pub fn new(base_url: &str) -> Self {
        Self::with_transport(FeedClient::new(base_url), UreqTransport::new())
    }
}

impl<T: Transport> HttpFetcher<T> {
    pub fn with_transport(client: FeedClient, transport: T) -> Self {
        Self { client, transport }
    }

    pub fn client(&self) -> &FeedClient {
        &self.client
    }
}

impl<T: Transport> PostFetcher for HttpFetcher<T> {
    fn fetch_posts(&self) -> Result<Vec<Post>, ApiError> {
        let response = self.transport.execute(&self.client.build_list_posts())?;
        self.client.parse_list_posts(response)
    }
}

impl<T: Transport> CommentFetcher for HttpFetcher<T> {
    fn fetch_comments(&self) -> Result<Vec<Comment>, ApiError> {
        let response = self.transport.execute(&self.client.build_list_comments())?;
        self.client.parse_list_comments(response)
    }
}
