//! GitHub issue update tool

use crate::github::{GitHubClient, GitHubResult, IssueState, UpdateIssueRequest};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `update_issue`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct UpdateIssueArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Issue number to update
    pub issue_number: u64,
    /// New title
    #[serde(default)]
    pub title: Option<String>,
    /// New description
    #[serde(default)]
    pub body: Option<String>,
    /// New state
    #[serde(default)]
    pub state: Option<IssueState>,
    /// Replacement label set
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Replacement assignee set
    #[serde(default)]
    pub assignees: Option<Vec<String>>,
    /// New milestone number
    #[serde(default)]
    pub milestone: Option<u64>,
}

/// Tool for editing an existing issue
#[derive(Clone)]
pub struct UpdateIssueTool;

impl Tool for UpdateIssueTool {
    type Args = UpdateIssueArgs;

    fn name() -> &'static str {
        "update_issue"
    }

    fn description() -> &'static str {
        "Update an existing issue in a GitHub repository. Only the fields provided are changed."
    }

    fn read_only() -> bool {
        false
    }

    fn idempotent() -> bool {
        true // Same fields, same result
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        let request = UpdateIssueRequest {
            owner: args.owner,
            repo: args.repo,
            issue_number: args.issue_number,
            title: args.title,
            body: args.body,
            state: args.state,
            labels: args.labels,
            assignees: args.assignees,
            milestone: args.milestone,
        };
        client.update_issue(request).await?
    }
}
