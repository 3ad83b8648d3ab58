//! GitHub branch creation tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `create_branch`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateBranchArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Name for the new branch
    #[schemars(length(min = 1))]
    pub branch: String,
    /// Optional: source branch to create from (defaults to the repository's default branch)
    #[serde(default)]
    pub from_branch: Option<String>,
}

/// Tool for creating a branch reference
#[derive(Clone)]
pub struct CreateBranchTool;

impl Tool for CreateBranchTool {
    type Args = CreateBranchArgs;

    fn name() -> &'static str {
        "create_branch"
    }

    fn description() -> &'static str {
        "Create a new branch in a GitHub repository"
    }

    fn read_only() -> bool {
        false // Creates a reference
    }

    fn idempotent() -> bool {
        false // Second call fails, the reference already exists
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .create_branch(args.owner, args.repo, args.branch, args.from_branch)
            .await?
    }
}
