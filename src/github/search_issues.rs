//! GitHub Issues search operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::search_users::SearchOrder;
use crate::github::util::{QueryParams, spawn_task};
use crate::runtime::AsyncTask;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Sort field for issue and pull request search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum IssueSearchSort {
    #[serde(rename = "comments")]
    Comments,
    #[serde(rename = "reactions")]
    Reactions,
    #[serde(rename = "reactions-+1")]
    ReactionsPlusOne,
    #[serde(rename = "reactions--1")]
    ReactionsMinusOne,
    #[serde(rename = "reactions-smile")]
    ReactionsSmile,
    #[serde(rename = "reactions-thinking_face")]
    ReactionsThinkingFace,
    #[serde(rename = "reactions-heart")]
    ReactionsHeart,
    #[serde(rename = "reactions-tada")]
    ReactionsTada,
    #[serde(rename = "interactions")]
    Interactions,
    #[serde(rename = "created")]
    Created,
    #[serde(rename = "updated")]
    Updated,
}

impl IssueSearchSort {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Comments => "comments",
            Self::Reactions => "reactions",
            Self::ReactionsPlusOne => "reactions-+1",
            Self::ReactionsMinusOne => "reactions--1",
            Self::ReactionsSmile => "reactions-smile",
            Self::ReactionsThinkingFace => "reactions-thinking_face",
            Self::ReactionsHeart => "reactions-heart",
            Self::ReactionsTada => "reactions-tada",
            Self::Interactions => "interactions",
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// GitHub search API for issues and PRs. Returns a single page.
pub(crate) fn search_issues(
    gateway: Arc<Gateway>,
    query: impl Into<String>,
    sort: Option<IssueSearchSort>,
    order: Option<SearchOrder>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> AsyncTask<GitHubResult<Value>> {
    let q = query.into();

    spawn_task(async move {
        let params = QueryParams::new()
            .push("q", q)
            .push_opt("sort", sort.map(|s| s.as_str()))
            .push_opt("order", order.map(|o| o.as_str()))
            .push_opt("page", page)
            .push_opt("per_page", per_page);

        gateway.get("/search/issues", params).await?.json()
    })
}
