//! Standard response envelopes: `{ data, _self, _count }` for collections and
//! `{ datum, _self }` for single items.
//!
//! Handlers pick the envelope per route. Both take the already-resolved store
//! result and never inspect item contents.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::convert::Infallible;

/// The URI the client requested, query string included, before any `nest` prefix is stripped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelfLink(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for SelfLink
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let uri = parts
            .extensions
            .get::<OriginalUri>()
            .map(|OriginalUri(uri)| uri)
            .unwrap_or(&parts.uri);
        let link = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| uri.path().to_string());
        Ok(SelfLink(link))
    }
}

#[derive(Debug, Serialize)]
pub struct ApiData<T> {
    pub data: Vec<T>,
    #[serde(rename = "_self")]
    pub self_link: String,
    #[serde(rename = "_count")]
    pub count: usize,
}

impl<T> ApiData<T> {
    pub fn new(SelfLink(self_link): SelfLink, data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            data,
            self_link,
            count,
        }
    }
}

/// Single-item envelope. `datum` serializes as `null` when the lookup found nothing.
#[derive(Debug, Serialize)]
pub struct ApiDatum<T> {
    pub datum: Option<T>,
    #[serde(rename = "_self")]
    pub self_link: String,
}

impl<T> ApiDatum<T> {
    pub fn new(SelfLink(self_link): SelfLink, datum: Option<T>) -> Self {
        Self { datum, self_link }
    }
}

impl<T: Serialize> IntoResponse for ApiData<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

impl<T: Serialize> IntoResponse for ApiDatum<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
