//! GitHub repository fork tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `fork_repository`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ForkRepositoryArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Optional: organization to fork to (defaults to your personal account)
    #[serde(default)]
    pub organization: Option<String>,
}

/// Tool for forking a repository
#[derive(Clone)]
pub struct ForkRepositoryTool;

impl Tool for ForkRepositoryTool {
    type Args = ForkRepositoryArgs;

    fn name() -> &'static str {
        "fork_repository"
    }

    fn description() -> &'static str {
        "Fork a GitHub repository to your account or specified organization"
    }

    fn read_only() -> bool {
        false
    }

    fn idempotent() -> bool {
        true // GitHub returns the existing fork
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .fork_repository(args.owner, args.repo, args.organization)
            .await?
    }
}
