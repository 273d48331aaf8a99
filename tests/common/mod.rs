//! Shared helpers for HTTP-level tests: an in-memory `ProductStore` and request shortcuts.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{
    header::{CONTENT_LENGTH, CONTENT_TYPE},
    Method, Request,
};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use products_api::{app, AppError, AppState, NewProduct, Product, ProductStore, ServerConfig};

#[derive(Default)]
struct Inner {
    rows: Mutex<Vec<Product>>,
    calls: AtomicUsize,
    failing: Mutex<bool>,
}

/// Vec-backed store. Clones share the same rows, so tests can seed and inspect while the router holds a copy.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn with_rows(rows: Vec<Product>) -> Self {
        let store = Self::default();
        *store.inner.rows.lock().unwrap() = rows;
        store
    }

    /// Every later call fails as if the pool could not hand out a connection.
    pub fn fail(&self) {
        *self.inner.failing.lock().unwrap() = true;
    }

    /// Number of store calls made so far.
    pub fn calls(&self) -> usize {
        self.inner.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<Product> {
        self.inner.rows.lock().unwrap().clone()
    }

    fn enter(&self) -> Result<(), AppError> {
        self.inner.calls.fetch_add(1, Ordering::SeqCst);
        if *self.inner.failing.lock().unwrap() {
            return Err(AppError::Db(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl ProductStore for MemoryStore {
    async fn find_many(&self) -> Result<Vec<Product>, AppError> {
        self.enter()?;
        Ok(self.rows())
    }

    async fn find_unique(&self, id: i32) -> Result<Option<Product>, AppError> {
        self.enter()?;
        Ok(self.inner.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn create(&self, input: &NewProduct) -> Result<Product, AppError> {
        self.enter()?;
        let mut rows = self.inner.rows.lock().unwrap();
        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let row = Product {
            id,
            name: input.name.clone(),
            price: input.price,
            description: input.description.clone(),
        };
        rows.push(row.clone());
        Ok(row)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.enter()
    }
}

pub fn product(id: i32, name: &str, price: f64, description: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        description: description.to_string(),
    }
}

pub fn build_test_app(store: MemoryStore) -> Router {
    build_test_app_with(store, &ServerConfig::default())
}

pub fn build_test_app_with(store: MemoryStore, config: &ServerConfig) -> Router {
    app(AppState::new(store), config)
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_raw(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with an explicit `Content-Length`, as a client sending a sized body would.
pub async fn post_sized(app: Router, uri: &str, body: impl Into<String>) -> Response {
    let body = body.into();
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(CONTENT_LENGTH, body.len())
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    post_raw(app, uri, body.to_string()).await
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
