//! GitHub API error types
//!
//! Every non-2xx response is classified exactly once into one of seven
//! taxonomy kinds. Failures that never produced a classifiable response
//! (transport, decoding, task channel) stay unclassified and are reported
//! verbatim.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Discriminant of the remote error taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    Authentication,
    Permission,
    RateLimit,
    NotFound,
    Conflict,
    Generic,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Authentication => "authentication",
            Self::Permission => "permission",
            Self::RateLimit => "rate_limit",
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::Generic => "generic",
        }
    }
}

/// Error types for GitHub API operations
#[derive(Debug, Error)]
pub enum GitHubError {
    /// HTTP 400, carries the raw error body when it parsed as JSON
    #[error("Validation Error: {message}{}", render_detail(.detail))]
    Validation {
        message: String,
        detail: Option<Value>,
    },

    /// HTTP 401
    #[error("Authentication Error: {0}. Please check your GitHub token.")]
    Authentication(String),

    /// HTTP 403 without an exhausted rate limit
    #[error("Permission Error: {0}. Your token may not have the required permissions.")]
    Permission(String),

    /// HTTP 403 with `x-ratelimit-remaining: 0`
    #[error("Rate Limit Error: {0}. Please try again later.")]
    RateLimit(String),

    /// HTTP 404
    #[error("Resource Not Found: {0}")]
    NotFound(String),

    /// HTTP 409
    #[error("Conflict Error: {0}. The operation conflicts with the current state.")]
    Conflict(String),

    /// Any other non-2xx status
    #[error("GitHub API Error: {0}")]
    Api(String),

    /// Request never completed (connection, TLS, timeout)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A successful response whose body did not have the expected shape
    #[error("Failed to decode GitHub response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The background task driving an operation was dropped before answering
    #[error("Task channel error: {0}")]
    TaskFailed(#[from] tokio::sync::oneshot::error::RecvError),

    /// Client setup/configuration error
    #[error("Client setup failed: {0}")]
    ClientSetup(String),
}

/// Convenience result alias for GitHub operations
pub type GitHubResult<T> = Result<T, GitHubError>;

impl GitHubError {
    /// Taxonomy kind, or `None` for failures that were never classified.
    #[must_use]
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            Self::Validation { .. } => Some(ErrorKind::Validation),
            Self::Authentication(_) => Some(ErrorKind::Authentication),
            Self::Permission(_) => Some(ErrorKind::Permission),
            Self::RateLimit(_) => Some(ErrorKind::RateLimit),
            Self::NotFound(_) => Some(ErrorKind::NotFound),
            Self::Conflict(_) => Some(ErrorKind::Conflict),
            Self::Api(_) => Some(ErrorKind::Generic),
            Self::Transport(_) | Self::Decode(_) | Self::TaskFailed(_) | Self::ClientSetup(_) => {
                None
            }
        }
    }

    /// Bare message without the kind-specific phrasing.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::Authentication(m)
            | Self::Permission(m)
            | Self::RateLimit(m)
            | Self::NotFound(m)
            | Self::Conflict(m)
            | Self::Api(m)
            | Self::ClientSetup(m) => m.clone(),
            other => other.to_string(),
        }
    }
}

fn render_detail(detail: &Option<Value>) -> String {
    match detail {
        Some(body) => format!("\nDetails: {body}"),
        None => String::new(),
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Classify a response. `None` means success (any 2xx), whatever the body.
///
/// Never fails: a body that is not a JSON object with a string `message`
/// degrades to `HTTP error <status>`.
#[must_use]
pub fn classify(status: u16, rate_limit_remaining: Option<&str>, body: &[u8]) -> Option<GitHubError> {
    if (200..300).contains(&status) {
        return None;
    }

    let detail: Option<Value> = serde_json::from_slice(body).ok();
    let message = detail
        .as_ref()
        .and_then(|v| ErrorBody::deserialize(v).ok())
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error {status}"));

    let error = match status {
        400 => GitHubError::Validation { message, detail },
        401 => GitHubError::Authentication(message),
        403 if rate_limit_remaining.map(str::trim) == Some("0") => GitHubError::RateLimit(message),
        403 => GitHubError::Permission(message),
        404 => GitHubError::NotFound(message),
        409 => GitHubError::Conflict(message),
        _ => GitHubError::Api(message),
    };
    Some(error)
}
