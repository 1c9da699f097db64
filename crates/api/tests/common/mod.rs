#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use reviewgate_api::config::ServerConfig;
use reviewgate_api::router::build_app_router;
use reviewgate_api::state::AppState;
use reviewgate_core::feedback::CategorySet;
use reviewgate_db::JsonStore;

pub const BUSINESSES: &str = r#"{
  "cafe-1": {
    "name": "Corner Cafe",
    "description": "Coffee and cake since 1998",
    "image": "/img/cafe.jpg",
    "gmb_url": "https://g.page/r/corner-cafe/review"
  },
  "barber-7": {
    "name": "Sharp Cuts",
    "gmb_url": "https://g.page/r/sharp-cuts/review"
  }
}"#;

pub const INDEX_HTML: &str = "<!doctype html><title>Rate us</title><div id=\"stars\"></div>";

/// A router over a throwaway data directory. Keep `dir` alive for the test.
pub struct TestApp {
    pub router: Router,
    pub dir: TempDir,
}

impl TestApp {
    pub fn data_dir(&self) -> std::path::PathBuf {
        self.dir.path().join("data")
    }
}

/// Build a test `ServerConfig` rooted at `root`.
pub fn test_config(root: &Path, categories: CategorySet) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        data_dir: root.join("data"),
        public_dir: root.join("public"),
        feedback_categories: categories,
    }
}

/// Build the full application router backed by a seeded JSON store.
pub async fn build_test_app() -> TestApp {
    build_test_app_with(CategorySet::default()).await
}

pub async fn build_test_app_with(categories: CategorySet) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path(), categories);

    std::fs::create_dir_all(&config.data_dir).unwrap();
    std::fs::write(config.data_dir.join("businesses.json"), BUSINESSES).unwrap();
    std::fs::create_dir_all(&config.public_dir).unwrap();
    std::fs::write(config.public_dir.join("index.html"), INDEX_HTML).unwrap();

    let store = JsonStore::open(&config.data_dir).await.unwrap();
    let state = AppState {
        store: Arc::new(store),
        config: Arc::new(config.clone()),
    };

    TestApp {
        router: build_app_router(state, &config),
        dir,
    }
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response.into_body().collect().await.unwrap().to_bytes().to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
