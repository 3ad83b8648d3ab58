//! GitHub issue creation tool

use crate::github::{CreateIssueRequest, GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `create_issue`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreateIssueArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Issue title
    #[schemars(length(min = 1))]
    pub title: String,
    /// Issue body (Markdown)
    #[serde(default)]
    pub body: Option<String>,
    /// Usernames to assign
    #[serde(default)]
    pub assignees: Option<Vec<String>>,
    /// Label names to apply
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Milestone number to associate
    #[serde(default)]
    pub milestone: Option<u64>,
}

/// Tool for creating GitHub issues
#[derive(Clone)]
pub struct CreateIssueTool;

impl Tool for CreateIssueTool {
    type Args = CreateIssueArgs;

    fn name() -> &'static str {
        "create_issue"
    }

    fn description() -> &'static str {
        "Create a new issue in a GitHub repository. Supports setting title, body, \
         labels, assignees and milestone."
    }

    fn read_only() -> bool {
        false // Creates data
    }

    fn idempotent() -> bool {
        false // Multiple calls create multiple issues
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        let request = CreateIssueRequest {
            owner: args.owner,
            repo: args.repo,
            title: args.title,
            body: args.body,
            labels: args.labels,
            assignees: args.assignees,
            milestone: args.milestone,
        };
        client.create_issue(request).await?
    }
}
