//! Fetch-and-bind tests against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the real
//! `UreqTransport` through `HttpFetcher` and `PostCommentBinder`. Validates
//! that request building, the blocking round-trip and response parsing work
//! end-to-end with the actual server.

use std::collections::HashSet;
use std::net::SocketAddr;

use feed_core::{
    ApiError, CommentFetcher, HttpFetcher, Post, PostCommentBinder, PostFetcher, TransportError,
};
use mock_server::Fixture;

/// Serve `fixture` on a random local port from a background thread.
fn spawn_server(fixture: Fixture) -> SocketAddr {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with(listener, fixture).await
        })
        .unwrap();
    });

    addr
}

/// An address nothing listens on.
fn closed_addr() -> SocketAddr {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap()
}

#[test]
fn fetches_both_collections() {
    let addr = spawn_server(Fixture::generated(10, 5));
    let fetcher = HttpFetcher::new(&format!("http://{addr}"));

    let posts = fetcher.fetch_posts().unwrap();
    assert_eq!(posts.len(), 10);
    assert_eq!(posts[0], Post::new(1, 1, "post 1", "body of post 1"));

    let comments = fetcher.fetch_comments().unwrap();
    assert_eq!(comments.len(), 50);
    assert_eq!(comments[0].post_id, 1);
    assert_eq!(comments[0].email, "reader0@example.com");
}

#[test]
fn bind_lifecycle() {
    // Step 1: serve 10 posts, 5 comments each.
    let fixture = Fixture::generated(10, 5);
    let addr = spawn_server(fixture.clone());
    let fetcher = HttpFetcher::new(&format!("http://{addr}/"));
    let binder = PostCommentBinder::new(&fetcher, &fetcher);

    // Step 2: every post is a key.
    let map = binder.bind().unwrap();
    assert_eq!(map.len(), fixture.posts.len());

    // Step 3: every comment is grouped exactly once, under its own post.
    let mut seen = HashSet::new();
    for (post, comments) in &map {
        assert_eq!(comments.len(), 5, "post {}", post.id);
        for comment in comments {
            assert_eq!(comment.post_id, post.id);
            assert!(seen.insert(comment.id));
        }
    }
    assert_eq!(seen.len(), fixture.comments.len());

    // Step 4: groups keep server order.
    let first = map.keys().find(|post| post.id == 1).unwrap();
    let ids: Vec<i64> = map[first].iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn bind_with_empty_comments() {
    let mut fixture = Fixture::generated(1, 0);
    fixture.posts[0].title = "Test".to_string();
    let addr = spawn_server(fixture);
    let fetcher = HttpFetcher::new(&format!("http://{addr}"));

    let map = PostCommentBinder::new(&fetcher, &fetcher).bind().unwrap();
    assert_eq!(map.len(), 1);
    let (post, comments) = map.iter().next().unwrap();
    assert_eq!(post.title, "Test");
    assert!(comments.is_empty());
}

#[test]
fn closed_port_is_transport_error() {
    let addr = closed_addr();
    let fetcher = HttpFetcher::new(&format!("http://{addr}"));

    let err = fetcher.fetch_posts().unwrap_err();
    assert!(matches!(err, ApiError::Transport(TransportError::Io { .. })));

    let err = PostCommentBinder::new(&fetcher, &fetcher).bind().unwrap_err();
    assert!(matches!(err, ApiError::Transport(TransportError::Io { .. })));
}

#[test]
fn comment_failure_fails_bind() {
    let posts = spawn_server(Fixture::generated(3, 2));
    let post_fetcher = HttpFetcher::new(&format!("http://{posts}"));
    let comment_fetcher = HttpFetcher::new(&format!("http://{}", closed_addr()));

    let err = PostCommentBinder::new(&post_fetcher, &comment_fetcher)
        .bind()
        .unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[test]
fn wrong_resource_is_status_error() {
    let addr = spawn_server(Fixture::generated(1, 1));
    let fetcher = HttpFetcher::new(&format!("http://{addr}/missing"));

    let err = fetcher.fetch_comments().unwrap_err();
    assert!(matches!(
        err,
        ApiError::Transport(TransportError::Status { status: 404, .. })
    ));
}
