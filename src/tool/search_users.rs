use crate::github::{GitHubClient, GitHubResult, SearchOrder, UserSearchSort};
use crate::tool::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `search_users`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchUsersArgs {
    /// Search query using GitHub user search syntax (e.g. `language:rust followers:>100`)
    #[schemars(length(min = 1))]
    pub q: String,
    /// Sort field; defaults to best match
    #[serde(default)]
    pub sort: Option<UserSearchSort>,
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

/// Tool for searching GitHub users
#[derive(Clone)]
pub struct SearchUsersTool;

impl Tool for SearchUsersTool {
    type Args = SearchUsersArgs;

    fn name() -> &'static str {
        "search_users"
    }

    fn description() -> &'static str {
        "Search for users on GitHub"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        client
            .search_users(args.q, args.sort, args.order, args.page, args.per_page)
            .await?
    }
}
