//! GitHub code search tool

use crate::github::{GitHubClient, GitHubResult, SearchOrder};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `search_code`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchCodeArgs {
    /// Search query using GitHub code search syntax (e.g. `addClass in:file language:js repo:owner/name`)
    #[schemars(length(min = 1))]
    pub q: String,
    /// Sort order of the results
    #[serde(default)]
    pub order: Option<SearchOrder>,
    /// Page number for pagination
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Results per page (max 100)
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

/// Tool for searching code across repositories
#[derive(Clone)]
pub struct SearchCodeTool;

impl Tool for SearchCodeTool {
    type Args = SearchCodeArgs;

    fn name() -> &'static str {
        "search_code"
    }

    fn description() -> &'static str {
        "Search for code across GitHub repositories"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .search_code(args.q, args.order, args.page, args.per_page)
            .await?
    }
}
