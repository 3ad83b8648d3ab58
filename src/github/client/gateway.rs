//! Remote API gateway: the five REST verbs, each response classified once.

use super::transport::{Method, RemoteRequest, RemoteResponse, Transport};
use crate::github::error::{GitHubResult, classify};
use crate::github::util::QueryParams;
use log::{debug, warn};
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Gateway {
    transport: Arc<dyn Transport>,
}

impl Gateway {
    #[must_use]
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get(&self, path: impl Into<String>, query: QueryParams) -> GitHubResult<RemoteResponse> {
        self.send(RemoteRequest::new(Method::GET, path).query(query))
            .await
    }

    pub async fn post(&self, path: impl Into<String>, body: Value) -> GitHubResult<RemoteResponse> {
        self.send(RemoteRequest::new(Method::POST, path).body(body))
            .await
    }

    pub async fn patch(&self, path: impl Into<String>, body: Value) -> GitHubResult<RemoteResponse> {
        self.send(RemoteRequest::new(Method::PATCH, path).body(body))
            .await
    }

    pub async fn put(&self, path: impl Into<String>, body: Value) -> GitHubResult<RemoteResponse> {
        self.send(RemoteRequest::new(Method::PUT, path).body(body))
            .await
    }

    pub async fn delete(&self, path: impl Into<String>) -> GitHubResult<RemoteResponse> {
        self.send(RemoteRequest::new(Method::DELETE, path)).await
    }

    /// Send and classify. A non-2xx response never reaches the caller as data.
    pub async fn send(&self, request: RemoteRequest) -> GitHubResult<RemoteResponse> {
        let (method, path) = (request.method.clone(), request.path.clone());
        debug!("{method} {path}");

        let response = self.transport.send(request).await?;
        match classify(
            response.status,
            response.rate_limit_remaining.as_deref(),
            &response.body,
        ) {
            None => Ok(response),
            Some(err) => {
                warn!("{method} {path} failed with {}: {}", response.status, err.message());
                Err(err)
            }
        }
    }
}
