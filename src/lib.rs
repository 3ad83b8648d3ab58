//! `github_mcp_tools` - GitHub operations exposed as MCP tools
//!
//! This library provides an async-first GitHub service layer: a classified
//! REST gateway, one module per GitHub operation, and a schema-checked tool
//! dispatcher that the MCP server (feature `mcp`) serves over stdio.

// Module declarations
pub mod config;
pub mod github;
pub mod runtime;
pub mod tool;

// MCP server adapter (conditional compilation)
#[cfg(feature = "mcp")]
pub mod server;

// Re-export runtime types
pub use runtime::AsyncTask;

// Re-export configuration
pub use config::{Config, ConfigError};

// Re-export GitHub client types
pub use github::{GitHubClient, GitHubClientBuilder, Transport};

// Re-export GitHub error types
pub use github::{ErrorKind, GitHubError, GitHubResult};

// Re-export GitHub operation options
pub use github::{
    CreateIssueRequest, CreateOrUpdateFileRequest, CreatePullRequestRequest, FileContent,
    IssueSearchSort, ListCommitsOptions, ListIssuesRequest, ListPullRequestsRequest, SearchOrder,
    UpdateIssueRequest, UserSearchSort,
};

// Re-export the dispatcher surface
pub use tool::{DispatchError, Dispatcher, FieldViolation, Tool, ToolInfo, ToolRegistry};

#[cfg(feature = "mcp")]
pub use server::GitHubMcpServer;
