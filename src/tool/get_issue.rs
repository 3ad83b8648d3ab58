//! GitHub issue retrieval tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `get_issue`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetIssueArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Issue number
    pub issue_number: u64,
}

#[derive(Clone)]
pub struct GetIssueTool;

impl Tool for GetIssueTool {
    type Args = GetIssueArgs;

    fn name() -> &'static str {
        "get_issue"
    }

    fn description() -> &'static str {
        "Get details of a specific issue in a GitHub repository."
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .get_issue(args.owner, args.repo, args.issue_number)
            .await?
    }
}
