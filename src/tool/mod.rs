//! MCP Tools for GitHub operations
//!
//! Each tool pairs a typed argument record (whose `JsonSchema` is the
//! advertised input shape) with the GitHub operation it runs. The
//! [`Dispatcher`] is the single entry point that validates and routes
//! invocations.

use crate::github::{GitHubClient, GitHubResult};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::future::Future;

pub mod dispatcher;
pub mod schema;

// Issue Operations
pub mod add_issue_comment;
pub mod create_issue;
pub mod get_issue;
pub mod list_issues;
pub mod search_issues;
pub mod update_issue;

// Pull Request Operations
pub mod create_pull_request;
pub mod list_pull_requests;

// Repository Operations
pub mod create_branch;
pub mod create_or_update_file;
pub mod create_repository;
pub mod fork_repository;
pub mod get_commit;
pub mod get_file_contents;
pub mod list_branches;
pub mod list_commits;
pub mod push_files;

// Search Operations
pub mod search_code;
pub mod search_repositories;
pub mod search_users;

pub use dispatcher::{DispatchError, Dispatcher, ToolDescriptor, ToolHints, ToolInfo, ToolRegistry};
pub use schema::FieldViolation;

pub use add_issue_comment::{AddIssueCommentArgs, AddIssueCommentTool};
pub use create_issue::{CreateIssueArgs, CreateIssueTool};
pub use get_issue::{GetIssueArgs, GetIssueTool};
pub use list_issues::{ListIssuesArgs, ListIssuesTool};
pub use search_issues::{SearchIssuesArgs, SearchIssuesTool};
pub use update_issue::{UpdateIssueArgs, UpdateIssueTool};

pub use create_pull_request::{CreatePullRequestArgs, CreatePullRequestTool};
pub use list_pull_requests::{ListPullRequestsArgs, ListPullRequestsTool};

pub use create_branch::{CreateBranchArgs, CreateBranchTool};
pub use create_or_update_file::{CreateOrUpdateFileArgs, CreateOrUpdateFileTool};
pub use create_repository::{CreateRepositoryArgs, CreateRepositoryTool};
pub use fork_repository::{ForkRepositoryArgs, ForkRepositoryTool};
pub use get_commit::{GetCommitArgs, GetCommitTool};
pub use get_file_contents::{GetFileContentsArgs, GetFileContentsTool};
pub use list_branches::{ListBranchesArgs, ListBranchesTool};
pub use list_commits::{ListCommitsArgs, ListCommitsTool};
pub use push_files::{PushFilesArgs, PushFilesTool};

pub use search_code::{SearchCodeArgs, SearchCodeTool};
pub use search_repositories::{SearchRepositoriesArgs, SearchRepositoriesTool};
pub use search_users::{SearchUsersArgs, SearchUsersTool};

/// One externally invocable GitHub capability.
pub trait Tool: Send + Sync + 'static {
    type Args: DeserializeOwned + JsonSchema + Send + 'static;

    fn name() -> &'static str;

    fn description() -> &'static str;

    fn read_only() -> bool;

    fn destructive() -> bool {
        false
    }

    fn idempotent() -> bool;

    fn open_world() -> bool {
        true // Calls external GitHub API
    }

    /// Checks the schema cannot express. Runs on the raw argument bag next
    /// to the schema check, so both sets of violations are reported at once.
    fn validate(_args: &Value) -> Vec<FieldViolation> {
        Vec::new()
    }

    fn execute(
        &self,
        client: &GitHubClient,
        args: Self::Args,
    ) -> impl Future<Output = GitHubResult<Value>> + Send;
}

/// The full catalogue, in the order it is advertised.
pub fn github_tools() -> Result<ToolRegistry, DispatchError> {
    ToolRegistry::new()
        // Repository tools
        .register(CreateRepositoryTool)?
        .register(ForkRepositoryTool)?
        .register(CreateOrUpdateFileTool)?
        .register(GetFileContentsTool)?
        .register(PushFilesTool)?
        // Issue tools
        .register(CreateIssueTool)?
        .register(UpdateIssueTool)?
        .register(ListIssuesTool)?
        .register(AddIssueCommentTool)?
        .register(GetIssueTool)?
        // Pull Request tools
        .register(CreatePullRequestTool)?
        .register(ListPullRequestsTool)?
        // Branch/Commit tools
        .register(CreateBranchTool)?
        .register(ListBranchesTool)?
        .register(ListCommitsTool)?
        .register(GetCommitTool)?
        // Search tools
        .register(SearchCodeTool)?
        .register(SearchRepositoriesTool)?
        .register(SearchIssuesTool)?
        .register(SearchUsersTool)
}
