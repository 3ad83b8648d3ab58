//! Multi-file commit tool

use crate::github::{FileContent, GitHubClient, GitHubResult};
use crate::tool::{FieldViolation, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `push_files`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PushFilesArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Branch to push to (e.g., 'main' or 'master')
    #[schemars(length(min = 1))]
    pub branch: String,
    /// Array of files to push
    #[schemars(length(min = 1))]
    pub files: Vec<FileContent>,
    /// Commit message
    #[schemars(length(min = 1))]
    pub message: String,
}

/// Tool for committing several files at once
#[derive(Clone)]
pub struct PushFilesTool;

impl Tool for PushFilesTool {
    type Args = PushFilesArgs;

    fn name() -> &'static str {
        "push_files"
    }

    fn description() -> &'static str {
        "Push multiple files to a GitHub repository in a single commit"
    }

    fn read_only() -> bool {
        false
    }

    fn destructive() -> bool {
        true // Replaces the listed paths on the branch
    }

    fn idempotent() -> bool {
        false // Every call adds a commit
    }

    fn validate(args: &Value) -> Vec<FieldViolation> {
        let Some(files) = args.get("files").and_then(Value::as_array) else {
            return Vec::new();
        };
        files
            .iter()
            .enumerate()
            .filter(|(_, file)| {
                file.get("path")
                    .and_then(Value::as_str)
                    .is_some_and(|path| path.trim().is_empty())
            })
            .map(|(i, _)| FieldViolation::new(format!("files[{i}].path"), "must not be empty"))
            .collect()
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .push_files(args.owner, args.repo, args.branch, args.files, args.message)
            .await?
    }
}
