//! Single-file commit tool

use crate::github::{CreateOrUpdateFileRequest, GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `create_or_update_file`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateOrUpdateFileArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Path where to create/update the file
    #[schemars(length(min = 1))]
    pub path: String,
    /// Content of the file (plain text, encoded before upload)
    pub content: String,
    /// Commit message
    #[schemars(length(min = 1))]
    pub message: String,
    /// Branch to create/update the file in
    #[schemars(length(min = 1))]
    pub branch: String,
    /// SHA of the file being replaced (required when updating existing files)
    #[serde(default)]
    pub sha: Option<String>,
}

/// Tool for creating or updating one file in a single commit
#[derive(Clone)]
pub struct CreateOrUpdateFileTool;

impl Tool for CreateOrUpdateFileTool {
    type Args = CreateOrUpdateFileArgs;

    fn name() -> &'static str {
        "create_or_update_file"
    }

    fn description() -> &'static str {
        "Create or update a single file in a GitHub repository"
    }

    fn read_only() -> bool {
        false // Writes a commit
    }

    fn destructive() -> bool {
        true // Overwrites existing content when `sha` is given
    }

    fn idempotent() -> bool {
        false
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        let request = CreateOrUpdateFileRequest {
            owner: args.owner,
            repo: args.repo,
            path: args.path,
            message: args.message,
            content: args.content,
            branch: args.branch,
            sha: args.sha,
        };
        client.create_or_update_file(request).await?
    }
}
