//! GitHub file contents tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `get_file_contents`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct GetFileContentsArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Path to the file or directory
    pub path: String,
    /// Branch to get contents from (defaults to the repository's default branch)
    #[serde(default)]
    pub branch: Option<String>,
}

/// Tool for reading a file or listing a directory
#[derive(Clone)]
pub struct GetFileContentsTool;

impl Tool for GetFileContentsTool {
    type Args = GetFileContentsArgs;

    fn name() -> &'static str {
        "get_file_contents"
    }

    fn description() -> &'static str {
        "Get the contents of a file or directory from a GitHub repository"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .get_file_contents(args.owner, args.repo, args.path, args.branch)
            .await?
    }
}
