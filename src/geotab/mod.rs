//! Remote-call seam for the fetch pipeline.
//!
//! The pipeline only needs two operations from the platform: a single
//! request/response call and a batched multi-call whose results are
//! positionally aligned with the requests. `GeotabClient` provides both over
//! JSON-RPC; tests plug in scripted fakes.

pub mod client;
pub mod request;

pub use client::{Credentials, GeotabClient};
pub use request::ApiCall;

use crate::errors::AppResult;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

#[async_trait]
pub trait Transport: Send + Sync {
    /// One `(method, params)` call.
    async fn call(&self, method: &str, params: Value) -> AppResult<Value>;

    /// Several calls in one round trip. Fails as a whole; on success the
    /// result at index `i` belongs to `calls[i]`.
    async fn multi_call(&self, calls: Vec<ApiCall>) -> AppResult<Vec<Value>>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn call(&self, method: &str, params: Value) -> AppResult<Value> {
        (**self).call(method, params).await
    }

    async fn multi_call(&self, calls: Vec<ApiCall>) -> AppResult<Vec<Value>> {
        (**self).multi_call(calls).await
    }
}
