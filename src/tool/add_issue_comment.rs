//! GitHub issue comment tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `add_issue_comment`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct AddIssueCommentArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Issue (or pull request) number
    pub issue_number: u64,
    /// Comment text (Markdown)
    pub body: String,
}

/// Tool for adding comments to GitHub issues
#[derive(Clone)]
pub struct AddIssueCommentTool;

impl Tool for AddIssueCommentTool {
    type Args = AddIssueCommentArgs;

    fn name() -> &'static str {
        "add_issue_comment"
    }

    fn description() -> &'static str {
        "Add a comment to an existing issue"
    }

    fn read_only() -> bool {
        false // Creates a comment
    }

    fn idempotent() -> bool {
        false // Each call adds another comment
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .add_issue_comment(args.owner, args.repo, args.issue_number, args.body)
            .await?
    }
}
