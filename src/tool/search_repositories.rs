//! GitHub repository search tool

use crate::github::{GitHubClient, GitHubResult};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `search_repositories`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchRepositoriesArgs {
    /// Search query (see GitHub search syntax)
    #[schemars(length(min = 1))]
    pub query: String,
    /// Page number for pagination
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Number of results per page (max 100)
    #[serde(default, rename = "perPage")]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

/// Tool for searching repositories
#[derive(Clone)]
pub struct SearchRepositoriesTool;

impl Tool for SearchRepositoriesTool {
    type Args = SearchRepositoriesArgs;

    fn name() -> &'static str {
        "search_repositories"
    }

    fn description() -> &'static str {
        "Search for GitHub repositories"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .search_repositories(args.query, args.page, args.per_page)
            .await?
    }
}
