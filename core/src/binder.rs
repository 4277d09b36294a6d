//! Joins comments onto their posts.
//!
//! # Design
//! `bind` is fail-fast: posts are fetched first, and if that fails comments
//! are never requested. Grouping goes through a `post_id -> comments` index
//! built in one pass, so the join is O(P + C) and each group keeps the
//! order the comments were fetched in.

use std::collections::{HashMap, HashSet};

use tracing::info;

use crate::error::ApiError;
use crate::fetcher::{CommentFetcher, PostFetcher};
use crate::types::{Comment, Post};

/// Every fetched post mapped to the comments that reference it.
pub type PostCommentMap = HashMap<Post, Vec<Comment>>;

/// Fetches posts and comments and groups them by foreign key.
#[derive(Debug, Clone)]
pub struct PostCommentBinder<P, C> {
    posts: P,
    comments: C,
}

impl<P: PostFetcher, C: CommentFetcher> PostCommentBinder<P, C> {
    pub fn new(posts: P, comments: C) -> Self {
        Self { posts, comments }
    }

    /// Fetch both collections and group them. No partial map is returned
    /// when either fetch fails.
    pub fn bind(&self) -> Result<PostCommentMap, ApiError> {
        let posts = self.posts.fetch_posts()?;
        let comments = self.comments.fetch_comments()?;
        Ok(group_comments(posts, comments))
    }
}

/// Group `comments` under the post whose `id` equals their `post_id`.
///
/// Every post becomes a key, with an empty vector if nothing references it.
/// Comments that reference no post are left out.
pub fn group_comments(posts: Vec<Post>, comments: Vec<Comment>) -> PostCommentMap {
    let total = comments.len();
    let mut by_post: HashMap<i64, Vec<Comment>> = HashMap::new();
    for comment in comments {
        by_post.entry(comment.post_id).or_default().push(comment);
    }

    let post_ids: HashSet<i64> = posts.iter().map(|post| post.id).collect();
    let orphaned: usize = by_post
        .iter()
        .filter(|(post_id, _)| !post_ids.contains(post_id))
        .map(|(_, group)| group.len())
        .sum();

    let mut grouped = PostCommentMap::with_capacity(posts.len());
    for post in posts {
        let group = by_post.get(&post.id).cloned().unwrap_or_default();
        grouped.insert(post, group);
    }

    info!(
        posts = grouped.len(),
        comments = total - orphaned,
        orphaned,
        "bound comments to posts"
    );
    grouped
}
