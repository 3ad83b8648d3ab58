//! GitHub user search operation with type-safe parameters.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{QueryParams, spawn_task};
use crate::runtime::AsyncTask;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Sort field for user search results.
///
/// Determines the primary field used to order search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserSearchSort {
    /// Sort by follower count (most to least)
    Followers,
    /// Sort by public repository count
    Repositories,
    /// Sort by account creation date
    Joined,
}

impl UserSearchSort {
    /// Returns the GitHub API string representation of this sort field.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Followers => "followers",
            Self::Repositories => "repositories",
            Self::Joined => "joined",
        }
    }
}

/// Sort order for search results.
///
/// Controls whether results are returned in ascending or descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchOrder {
    /// Ascending order (low to high, old to new)
    Asc,
    /// Descending order (high to low, new to old)
    Desc,
}

impl SearchOrder {
    /// Returns the GitHub API string representation of this sort order.
    #[inline]
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// Search for GitHub users matching a query.
///
/// The query supports GitHub's advanced search syntax:
/// - `in:login` - Search in username
/// - `in:name` - Search in display name
/// - `type:user` - Only match user accounts
/// - `type:org` - Only match organization accounts
/// - `repos:>N` - Users with more than N repositories
/// - `followers:>N` - Users with more than N followers
/// - `language:rust` - Users with repositories in a language
/// - `location:seattle` - Users in a location
///
/// # Example
///
/// ```rust,no_run
/// use github_mcp_tools::{GitHubClient, SearchOrder, UserSearchSort};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GitHubClient::with_token("your-token")?;
///
/// let results = client.search_users(
///     "language:rust repos:>50",
///     Some(UserSearchSort::Repositories),
///     Some(SearchOrder::Desc),
///     Some(1),
///     Some(50),
/// ).await??;
///
/// for user in results["items"].as_array().into_iter().flatten() {
///     println!("{}", user["login"]);
/// }
/// # Ok(())
/// # }
/// ```
pub(crate) fn search_users(
    gateway: Arc<Gateway>,
    query: impl Into<String>,
    sort: Option<UserSearchSort>,
    order: Option<SearchOrder>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> AsyncTask<GitHubResult<Value>> {
    let query = query.into();

    spawn_task(async move {
        let params = QueryParams::new()
            .push("q", query)
            .push_opt("sort", sort.map(|s| s.as_str()))
            .push_opt("order", order.map(|o| o.as_str()))
            .push_opt("page", page)
            .push_opt("per_page", per_page);

        gateway.get("/search/users", params).await?.json()
    })
}
