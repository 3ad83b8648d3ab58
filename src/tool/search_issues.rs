//! GitHub issue and pull request search tool

use crate::github::{GitHubClient, GitHubResult, IssueSearchSort, SearchOrder};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `search_issues`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchIssuesArgs {
    /// Search query using GitHub issue search syntax (e.g. `repo:owner/name is:open label:bug`)
    #[schemars(length(min = 1))]
    pub q: String,
    /// Sort field; defaults to best match
    #[serde(default)]
    pub sort: Option<IssueSearchSort>,
    /// Sort order
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

/// Tool for searching issues and pull requests
#[derive(Clone)]
pub struct SearchIssuesTool;

impl Tool for SearchIssuesTool {
    type Args = SearchIssuesArgs;

    fn name() -> &'static str {
        "search_issues"
    }

    fn description() -> &'static str {
        "Search for issues and pull requests across GitHub repositories"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .search_issues(args.q, args.sort, args.order, args.page, args.per_page)
            .await?
    }
}
