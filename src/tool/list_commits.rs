//! GitHub commit listing tool

use crate::github::{GitHubClient, GitHubResult, ListCommitsOptions};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `list_commits`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListCommitsArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Branch name or commit SHA to start listing from
    #[serde(default)]
    pub sha: Option<String>,
    /// Page number for pagination
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Results per page (max 100)
    #[serde(default, rename = "perPage")]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

/// Tool for listing the commits of a branch
#[derive(Clone)]
pub struct ListCommitsTool;

impl Tool for ListCommitsTool {
    type Args = ListCommitsArgs;

    fn name() -> &'static str {
        "list_commits"
    }

    fn description() -> &'static str {
        "Get list of commits of a branch in a GitHub repository"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        let options = ListCommitsOptions {
            sha: args.sha,
            page: args.page,
            per_page: args.per_page,
        };
        client.list_commits(args.owner, args.repo, options).await?
    }
}
