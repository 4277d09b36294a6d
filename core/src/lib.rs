//! Blocking client core for a posts/comments feed.
//!
//! # Overview
//! Fetches the `posts` and `comments` collections from a jsonplaceholder-style
//! REST API and joins them in memory on `comment.postId == post.id`.
//!
//! # Design
//! - `FeedClient` builds `HttpRequest` values and parses `HttpResponse` values
//!   without touching the network. A `Transport` executes the round-trip;
//!   `UreqTransport` is the blocking implementation used in production.
//! - `PostFetcher` / `CommentFetcher` are the seams the binder depends on, so
//!   the join can be exercised against canned collections.
//! - `PostCommentBinder` fetches both collections and delegates to the pure
//!   `group_comments` function.
//! - `LoginRecord` takes its id from an explicit `IdSequence` rather than a
//!   process-wide counter.

pub mod binder;
pub mod client;
pub mod error;
pub mod fetcher;
pub mod http;
pub mod login;
pub mod transport;
pub mod types;

pub use binder::{group_comments, PostCommentBinder, PostCommentMap};
pub use client::{FeedClient, DEFAULT_BASE_URL};
pub use error::{ApiError, TransportError};
pub use fetcher::{CommentFetcher, HttpFetcher, PostFetcher};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use login::{IdSequence, LoginRecord};
pub use transport::{Transport, UreqTransport};
pub use types::{Comment, Post};
