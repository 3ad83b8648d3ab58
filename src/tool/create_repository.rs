//! GitHub repository creation tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `create_repository`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateRepositoryArgs {
    /// Repository name
    #[schemars(length(min = 1))]
    pub name: String,
    /// Repository description
    #[serde(default)]
    pub description: Option<String>,
    /// Whether the repository should be private
    #[serde(default)]
    pub private: Option<bool>,
    /// Initialize with README.md
    #[serde(default, rename = "autoInit")]
    pub auto_init: Option<bool>,
}

/// Tool for creating a repository under the authenticated account
#[derive(Clone)]
pub struct CreateRepositoryTool;

impl Tool for CreateRepositoryTool {
    type Args = CreateRepositoryArgs;

    fn name() -> &'static str {
        "create_repository"
    }

    fn description() -> &'static str {
        "Create a new GitHub repository in your account"
    }

    fn read_only() -> bool {
        false // Creates a repository
    }

    fn idempotent() -> bool {
        false // A second call conflicts on the name
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .create_repository(args.name, args.description, args.private, args.auto_init)
            .await?
    }
}
