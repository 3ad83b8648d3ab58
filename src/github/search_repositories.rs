//! GitHub repository search operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{QueryParams, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// Search repositories with GitHub's search syntax.
pub(crate) fn search_repositories(
    gateway: Arc<Gateway>,
    query: impl Into<String>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> AsyncTask<GitHubResult<Value>> {
    let query = query.into();

    spawn_task(async move {
        let params = QueryParams::new()
            .push("q", query)
            .push_opt("page", page)
            .push_opt("per_page", per_page);

        gateway.get("/search/repositories", params).await?.json()
    })
}
