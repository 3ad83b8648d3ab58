//! GitHub commit detail tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `get_commit`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetCommitArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Commit SHA, branch name, or tag name
    #[schemars(length(min = 1))]
    pub sha: String,
    /// Page number of the changed-files list
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Changed files per page (max 100)
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

/// Tool for fetching one commit with its diff stats
#[derive(Clone)]
pub struct GetCommitTool;

impl Tool for GetCommitTool {
    type Args = GetCommitArgs;

    fn name() -> &'static str {
        "get_commit"
    }

    fn description() -> &'static str {
        "Get details for a commit from a GitHub repository, including changed files"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .get_commit(args.owner, args.repo, args.sha, args.page, args.per_page)
            .await?
    }
}
