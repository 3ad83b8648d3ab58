//! GitHub pull request listing tool

use crate::github::{
    Direction, GitHubClient, GitHubResult, ListPullRequestsRequest, PullRequestSort, StateFilter,
};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `list_pull_requests`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListPullRequestsArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Filter by state
    #[serde(default)]
    pub state: Option<StateFilter>,
    /// Filter by head user or organization and branch name (`user:ref-name`)
    #[serde(default)]
    pub head: Option<String>,
    /// Filter by base branch name
    #[serde(default)]
    pub base: Option<String>,
    /// Sort field
    #[serde(default)]
    pub sort: Option<PullRequestSort>,
    /// Sort direction
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Page number for pagination
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Results per page (max 100)
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

/// Tool for listing pull requests
#[derive(Clone)]
pub struct ListPullRequestsTool;

impl Tool for ListPullRequestsTool {
    type Args = ListPullRequestsArgs;

    fn name() -> &'static str {
        "list_pull_requests"
    }

    fn description() -> &'static str {
        "List pull requests in a GitHub repository with filtering options"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        let request = ListPullRequestsRequest {
            owner: args.owner,
            repo: args.repo,
            state: args.state,
            head: args.head,
            base: args.base,
            sort: args.sort,
            direction: args.direction,
            page: args.page,
            per_page: args.per_page,
        };
        client.list_pull_requests(request).await?
    }
}
