//! GitHub API client wrapper
//!
//! Provides clean API for GitHub operations on top of the [`Gateway`].
//!
//! # Examples
//!
//! ```rust,no_run
//! use github_mcp_tools::GitHubClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gh = GitHubClient::with_token("ghp_...")?;
//!
//!     let issue = gh.get_issue("owner", "repo", 42).await??;
//!     println!("{}", issue["title"]);
//!
//!     Ok(())
//! }
//! ```

use crate::config::{Config, DEFAULT_API_URL};
use crate::github::error::{GitHubError, GitHubResult};
use std::sync::Arc;

mod gateway;
mod issues;
mod pull_requests;
mod repositories;
mod search;
mod transport;

pub use gateway::Gateway;
pub use transport::{
    GITHUB_ACCEPT, Method, RATE_LIMIT_REMAINING, RemoteRequest, RemoteResponse, ReqwestTransport,
    Transport, default_headers,
};

/// GitHub API client.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct GitHubClient {
    gateway: Arc<Gateway>,
}

impl GitHubClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> GitHubClientBuilder {
        GitHubClientBuilder::new()
    }

    /// Convenience: create client with personal access token
    pub fn with_token(token: impl Into<String>) -> GitHubResult<Self> {
        Self::builder().personal_token(token).build()
    }

    /// Client for a loaded startup configuration.
    pub fn from_config(config: &Config) -> GitHubResult<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::with_transport(Arc::new(transport)))
    }

    /// Client over an arbitrary transport.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self {
            gateway: Arc::new(Gateway::new(transport)),
        }
    }

    /// Get the gateway used for remote calls
    #[must_use]
    pub fn gateway(&self) -> &Arc<Gateway> {
        &self.gateway
    }
}

/// Builder for creating `GitHubClient`
pub struct GitHubClientBuilder {
    token: Option<String>,
    base_uri: Option<String>,
    transport: Option<Arc<dyn Transport>>,
}

impl GitHubClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            token: None,
            base_uri: None,
            transport: None,
        }
    }

    /// Set personal access token for authentication
    pub fn personal_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set base URI (for GitHub Enterprise)
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Use a custom transport instead of the `reqwest` one
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the `GitHubClient`
    pub fn build(self) -> GitHubResult<GitHubClient> {
        if let Some(transport) = self.transport {
            return Ok(GitHubClient::with_transport(transport));
        }

        let token = self
            .token
            .ok_or_else(|| GitHubError::ClientSetup("personal access token is required".into()))?;

        let mut config = Config::with_token(token);
        config.api_url = self
            .base_uri
            .map(|uri| uri.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        GitHubClient::from_config(&config)
    }
}

impl Default for GitHubClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
