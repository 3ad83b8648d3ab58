//! GitHub code search operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::search_users::SearchOrder;
use crate::github::util::{QueryParams, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// Search for code across GitHub repositories.
pub(crate) fn search_code(
    gateway: Arc<Gateway>,
    query: impl Into<String>,
    order: Option<SearchOrder>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> AsyncTask<GitHubResult<Value>> {
    let query = query.into();

    spawn_task(async move {
        let params = QueryParams::new()
            .push("q", query)
            .push_opt("order", order.map(|o| o.as_str()))
            .push_opt("page", page)
            .push_opt("per_page", per_page);

        gateway.get("/search/code", params).await?.json()
    })
}
