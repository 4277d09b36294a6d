use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: i64,
    pub id: i64,
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub post_id: i64,
    pub id: i64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// The collections the server answers with. Read-only once served.
#[derive(Clone, Debug, Default)]
pub struct Fixture {
    pub posts: Vec<Post>,
    pub comments: Vec<Comment>,
}

impl Fixture {
    /// `posts` posts, ten per user, each with `comments_per_post` comments.
    /// Comment ids run across the whole collection, as jsonplaceholder does.
    pub fn generated(posts: i64, comments_per_post: i64) -> Self {
        let posts: Vec<Post> = (1..=posts)
            .map(|id| Post {
                user_id: (id - 1) / 10 + 1,
                id,
                title: format!("post {id}"),
                body: format!("body of post {id}"),
            })
            .collect();
        let comments = posts
            .iter()
            .flat_map(|post| (0..comments_per_post).map(move |n| (post.id, n)))
            .enumerate()
            .map(|(index, (post_id, n))| Comment {
                post_id,
                id: index as i64 + 1,
                name: format!("comment {n} on post {post_id}"),
                email: format!("reader{n}@example.com"),
                body: format!("comment body {}", index + 1),
            })
            .collect();
        Self { posts, comments }
    }
}

pub type Db = Arc<Fixture>;

/// Router over the default fixture: 10 posts with 5 comments each.
pub fn app() -> Router {
    app_with(Fixture::generated(10, 5))
}

pub fn app_with(fixture: Fixture) -> Router {
    let db: Db = Arc::new(fixture);
    Router::new()
        .route("/posts", get(list_posts))
        .route("/posts/{id}", get(get_post))
        .route("/posts/{id}/comments", get(list_post_comments))
        .route("/comments", get(list_comments))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, fixture: Fixture) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(fixture)).await
}

async fn list_posts(State(db): State<Db>) -> Json<Vec<Post>> {
    Json(db.posts.clone())
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    Json(db.comments.clone())
}

async fn get_post(State(db): State<Db>, Path(id): Path<i64>) -> Result<Json<Post>, StatusCode> {
    db.posts
        .iter()
        .find(|post| post.id == id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_post_comments(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<Comment>>, StatusCode> {
    if !db.posts.iter().any(|post| post.id == id) {
        return Err(StatusCode::NOT_FOUND);
    }
    let comments = db
        .comments
        .iter()
        .filter(|comment| comment.post_id == id)
        .cloned()
        .collect();
    Ok(Json(comments))
}
