//! GitHub pull request creation tool

use crate::github::{CreatePullRequestRequest, GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `create_pull_request`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CreatePullRequestArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Pull request title
    #[schemars(length(min = 1))]
    pub title: String,
    /// Pull request body (Markdown)
    #[serde(default)]
    pub body: Option<String>,
    /// The name of the branch where your changes are implemented
    #[schemars(length(min = 1))]
    pub head: String,
    /// The name of the branch you want the changes pulled into
    #[schemars(length(min = 1))]
    pub base: String,
    /// Whether to create the pull request as a draft
    #[serde(default)]
    pub draft: Option<bool>,
    /// Whether maintainers can modify the pull request
    #[serde(default)]
    pub maintainer_can_modify: Option<bool>,
}

/// Tool for opening a pull request
#[derive(Clone)]
pub struct CreatePullRequestTool;

impl Tool for CreatePullRequestTool {
    type Args = CreatePullRequestArgs;

    fn name() -> &'static str {
        "create_pull_request"
    }

    fn description() -> &'static str {
        "Create a new pull request in a GitHub repository"
    }

    fn read_only() -> bool {
        false // Creates a pull request
    }

    fn idempotent() -> bool {
        false // A second call for the same head/base fails
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        let request = CreatePullRequestRequest {
            owner: args.owner,
            repo: args.repo,
            title: args.title,
            body: args.body,
            head: args.head,
            base: args.base,
            draft: args.draft,
            maintainer_can_modify: args.maintainer_can_modify,
        };
        client.create_pull_request(request).await?
    }
}
