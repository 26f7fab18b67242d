use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use rivet::files::FileStore;
use rivet::http::request::{Method, Request, RequestBuilder};
use rivet::http::response::StatusCode;
use rivet::http::router::{Action, Router, select};

static COUNTER: AtomicUsize = AtomicUsize::new(0);

fn temp_dir() -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "rivet-router-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    ));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn request(method: Method, path: &str) -> Request {
    RequestBuilder::new().method(method).path(path).build().unwrap()
}

#[test]
fn test_route_selection_order() {
    assert_eq!(select(&request(Method::GET, "/")), Action::Root);
    assert_eq!(select(&request(Method::GET, "/echo/abc")), Action::Echo);
    assert_eq!(select(&request(Method::GET, "/user-agent")), Action::UserAgent);
    assert_eq!(select(&request(Method::GET, "/files/a")), Action::Files);
    assert_eq!(select(&request(Method::POST, "/files/a")), Action::Files);
    assert_eq!(select(&request(Method::GET, "/unknown/path")), Action::NotFound);
}

#[test]
fn test_unsupported_method_wins_over_paths() {
    for path in ["/", "/echo/x", "/files/a", "/nowhere"] {
        let req = request(Method::Other("DELETE".to_string()), path);
        assert_eq!(select(&req), Action::MethodNotAllowed);
    }
}

#[test]
fn test_prefix_boundaries() {
    assert_eq!(select(&request(Method::GET, "/echo")), Action::NotFound);
    assert_eq!(select(&request(Method::GET, "/echoes/x")), Action::NotFound);
    assert_eq!(select(&request(Method::GET, "/user-agent/x")), Action::NotFound);
    assert_eq!(select(&request(Method::GET, "/files")), Action::NotFound);
    assert_eq!(select(&request(Method::POST, "/")), Action::NotFound);
    assert_eq!(select(&request(Method::POST, "/echo/x")), Action::NotFound);
}

#[tokio::test]
async fn test_root_is_status_only() {
    let router = Router::default();
    let response = router.handle(&request(Method::GET, "/")).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.is_status_only());
}

#[tokio::test]
async fn test_echo_returns_remainder() {
    let router = Router::default();
    let response = router.handle(&request(Method::GET, "/echo/hello/world")).await;

    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
    assert_eq!(response.body, b"hello/world".to_vec());
}

#[tokio::test]
async fn test_echo_empty_remainder() {
    let router = Router::default();
    let response = router.handle(&request(Method::GET, "/echo/")).await;

    assert_eq!(response.body, Vec::<u8>::new());
    assert_eq!(response.header("Content-Length"), Some("0"));
}

#[tokio::test]
async fn test_user_agent_present_and_absent() {
    let router = Router::default();

    let with_header = RequestBuilder::new()
        .method(Method::GET)
        .path("/user-agent")
        .header("User-Agent", "foo/1.0")
        .build()
        .unwrap();
    let response = router.handle(&with_header).await;
    assert_eq!(response.body, b"foo/1.0".to_vec());

    let response = router.handle(&request(Method::GET, "/user-agent")).await;
    assert_eq!(response.status, StatusCode::Ok);
    assert!(response.body.is_empty());
    assert_eq!(response.header("Content-Type"), Some("text/plain"));
}

#[tokio::test]
async fn test_method_not_allowed() {
    let router = Router::default();
    let response = router
        .handle(&request(Method::Other("PUT".to_string()), "/files/a"))
        .await;

    assert_eq!(response.status, StatusCode::MethodNotAllowed);
    assert!(response.is_status_only());
}

#[tokio::test]
async fn test_unknown_path_is_not_found() {
    let router = Router::default();
    let response = router.handle(&request(Method::GET, "/unknown/path")).await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_files_disabled_without_directory() {
    let router = Router::new(FileStore::disabled());

    let response = router.handle(&request(Method::GET, "/files/a.txt")).await;
    assert_eq!(response.status, StatusCode::NotFound);

    let upload = RequestBuilder::new()
        .method(Method::POST)
        .path("/files/a.txt")
        .body(b"x".to_vec())
        .build()
        .unwrap();
    let response = router.handle(&upload).await;
    assert_eq!(response.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_files_upload_download_roundtrip() {
    let router = Router::new(FileStore::new(Some(temp_dir())));

    let upload = RequestBuilder::new()
        .method(Method::POST)
        .path("/files/report.txt")
        .body(b"B".to_vec())
        .build()
        .unwrap();
    let response = router.handle(&upload).await;
    assert_eq!(response.status, StatusCode::Created);
    assert!(response.is_status_only());

    let response = router.handle(&request(Method::GET, "/files/report.txt")).await;
    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
    assert_eq!(response.body, b"B".to_vec());
}

#[tokio::test]
async fn test_files_missing_is_not_found() {
    let router = Router::new(FileStore::new(Some(temp_dir())));
    let response = router.handle(&request(Method::GET, "/files/missing.txt")).await;

    assert_eq!(response.status, StatusCode::NotFound);
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_files_upload_failure_is_internal_error() {
    let router = Router::new(FileStore::new(Some(temp_dir())));
    let upload = RequestBuilder::new()
        .method(Method::POST)
        .path("/files/no-such-dir/a.txt")
        .body(b"x".to_vec())
        .build()
        .unwrap();

    let response = router.handle(&upload).await;

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert!(response.body.is_empty());
}
