//! GitHub branch listing tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `list_branches`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListBranchesArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Only return protected (true) or unprotected (false) branches
    #[serde(default)]
    pub protected: Option<bool>,
    /// Page number for pagination
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Results per page (max 100)
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

/// Tool for listing repository branches
#[derive(Clone)]
pub struct ListBranchesTool;

impl Tool for ListBranchesTool {
    type Args = ListBranchesArgs;

    fn name() -> &'static str {
        "list_branches"
    }

    fn description() -> &'static str {
        "List branches in a GitHub repository"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .list_branches(args.owner, args.repo, args.protected, args.page, args.per_page)
            .await?
    }
}
