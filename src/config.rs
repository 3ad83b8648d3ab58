//! Startup configuration.
//!
//! Read once before the server starts; the resulting [`Config`] is handed to
//! [`GitHubClient::from_config`](crate::GitHubClient::from_config) and never
//! re-read.

use thiserror::Error;

/// Primary token variable.
pub const TOKEN_ENV: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";
/// Fallback token variable.
pub const TOKEN_ENV_FALLBACK: &str = "GITHUB_TOKEN";
/// Optional base URL override (GitHub Enterprise).
pub const API_URL_ENV: &str = "GITHUB_API_URL";

pub const DEFAULT_API_URL: &str = "https://api.github.com";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("GITHUB_PERSONAL_ACCESS_TOKEN (or GITHUB_TOKEN) environment variable is required")]
    MissingToken,

    #[error("GITHUB_API_URL must be an http(s) URL, got `{0}`")]
    InvalidApiUrl(String),
}

#[derive(Clone)]
pub struct Config {
    pub token: String,
    pub api_url: String,
    pub user_agent: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("token", &"<redacted>")
            .field("api_url", &self.api_url)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl Config {
    /// Load from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let token = non_blank(TOKEN_ENV)
            .or_else(|| non_blank(TOKEN_ENV_FALLBACK))
            .ok_or(ConfigError::MissingToken)?;

        let api_url = match non_blank(API_URL_ENV) {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !(url.starts_with("https://") || url.starts_with("http://")) {
                    return Err(ConfigError::InvalidApiUrl(url));
                }
                url
            }
            None => DEFAULT_API_URL.to_string(),
        };

        Ok(Self {
            token: token.trim().to_string(),
            api_url,
            user_agent: default_user_agent(),
        })
    }

    /// Config with an explicit token and the default endpoint.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    format!("github-mcp-tools/{}", env!("CARGO_PKG_VERSION"))
}
