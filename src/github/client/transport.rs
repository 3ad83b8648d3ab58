//! HTTP transport seam between the gateway and the network.

use crate::config::Config;
use crate::github::error::{GitHubError, GitHubResult};
use crate::github::util::QueryParams;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde_json::Value;

pub use reqwest::Method;

/// Media type pinning the stable REST API version.
pub const GITHUB_ACCEPT: &str = "application/vnd.github.v3+json";

/// Header GitHub uses to report the remaining request budget.
pub const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// One outbound call, relative to the configured base URL.
#[derive(Debug, Clone, PartialEq)]
pub struct RemoteRequest {
    pub method: Method,
    pub path: String,
    pub query: QueryParams,
    pub body: Option<Value>,
}

impl RemoteRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: QueryParams::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    #[must_use]
    pub fn body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Raw response as received, before classification.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    pub status: u16,
    pub rate_limit_remaining: Option<String>,
    pub body: Bytes,
}

impl RemoteResponse {
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            rate_limit_remaining: None,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn with_rate_limit_remaining(mut self, remaining: impl Into<String>) -> Self {
        self.rate_limit_remaining = Some(remaining.into());
        self
    }

    /// Decode the body. An empty body decodes as JSON `null`.
    pub fn json<T: DeserializeOwned>(&self) -> GitHubResult<T> {
        if self.body.iter().all(u8::is_ascii_whitespace) {
            return Ok(serde_json::from_value(Value::Null)?);
        }
        Ok(serde_json::from_slice(&self.body)?)
    }
}

/// Sends a request and returns whatever came back, without judging the status.
#[async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    async fn send(&self, request: RemoteRequest) -> GitHubResult<RemoteResponse>;
}

/// Production transport backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
    base_url: String,
}

impl ReqwestTransport {
    pub fn new(config: &Config) -> GitHubResult<Self> {
        let http = reqwest::Client::builder()
            .default_headers(default_headers(&config.token, &config.user_agent)?)
            .build()
            .map_err(|e| GitHubError::ClientSetup(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.api_url.clone(),
        })
    }
}

/// Headers attached to every call: bearer token, pinned API version, client id.
pub fn default_headers(token: &str, user_agent: &str) -> GitHubResult<HeaderMap> {
    let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|e| GitHubError::ClientSetup(format!("Invalid token: {e}")))?;
    auth.set_sensitive(true);

    let agent = HeaderValue::from_str(user_agent)
        .map_err(|e| GitHubError::ClientSetup(format!("Invalid user agent: {e}")))?;

    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, auth);
    headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
    headers.insert(USER_AGENT, agent);
    Ok(headers)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn send(&self, request: RemoteRequest) -> GitHubResult<RemoteResponse> {
        let url = format!("{}{}", self.base_url, request.path);
        let mut builder = self.http.request(request.method, url);

        if !request.query.is_empty() {
            builder = builder.query(request.query.pairs());
        }
        // `.json` also sets `Content-Type: application/json`
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let rate_limit_remaining = response
            .headers()
            .get(RATE_LIMIT_REMAINING)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response.bytes().await?;

        Ok(RemoteResponse {
            status,
            rate_limit_remaining,
            body,
        })
    }
}
