//! GitHub API operations module
//!
//! Provides GitHub REST operations on top of a small classified gateway.

pub mod client;
pub mod error;
pub mod models;
pub mod params;
pub mod util;

// Re-export client types
pub use client::{
    Gateway, GitHubClient, GitHubClientBuilder, Method, RemoteRequest, RemoteResponse,
    ReqwestTransport, Transport,
};

// Re-export error types
pub use error::{ErrorKind, GitHubError, GitHubResult, classify};
pub use util::{QueryParams, spawn_task};

// Re-export request/options types
pub use create_issue::CreateIssueRequest;
pub use create_or_update_file::CreateOrUpdateFileRequest;
pub use create_pull_request::CreatePullRequestRequest;
pub use list_commits::ListCommitsOptions;
pub use list_issues::ListIssuesRequest;
pub use list_pull_requests::ListPullRequestsRequest;
pub use models::FileContent;
pub use params::{Direction, IssueSort, IssueState, PullRequestSort, StateFilter};
pub use search_issues::IssueSearchSort;
pub use search_users::{SearchOrder, UserSearchSort};
pub use update_issue::UpdateIssueRequest;

// GitHub API operations - Issues (internal)
pub(crate) mod add_issue_comment;
pub(crate) mod create_issue;
pub(crate) mod get_issue;
pub(crate) mod list_issues;
pub(crate) mod search_issues;
pub(crate) mod update_issue;

// GitHub API operations - Pull Requests (internal)
pub(crate) mod create_pull_request;
pub(crate) mod list_pull_requests;

// GitHub API operations - Repositories (internal)
pub(crate) mod create_branch;
pub(crate) mod create_or_update_file;
pub(crate) mod create_repository;
pub(crate) mod fork_repository;
pub(crate) mod get_commit;
pub(crate) mod get_file_contents;
pub(crate) mod list_branches;
pub(crate) mod list_commits;
pub(crate) mod push_files;
pub(crate) mod search_code;
pub(crate) mod search_repositories;

// GitHub API operations - Users (internal)
pub(crate) mod search_users;
