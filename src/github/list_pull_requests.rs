//! GitHub Pull Requests listing operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::params::{Direction, PullRequestSort, StateFilter};
use crate::github::util::{QueryParams, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// Request parameters for listing pull requests
#[derive(Debug, Clone)]
pub struct ListPullRequestsRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Filter by pull request state (open, closed, all)
    pub state: Option<StateFilter>,
    /// Filter by head `user:ref-name`
    pub head: Option<String>,
    /// Filter by base branch
    pub base: Option<String>,
    /// Sort field (created, updated, popularity, long-running)
    pub sort: Option<PullRequestSort>,
    /// Sort direction (asc, desc)
    pub direction: Option<Direction>,
    /// Page number for pagination
    pub page: Option<u32>,
    /// Results per page (max 100)
    pub per_page: Option<u32>,
}

/// List one page of pull requests.
pub(crate) fn list_pull_requests(
    gateway: Arc<Gateway>,
    request: ListPullRequestsRequest,
) -> AsyncTask<GitHubResult<Value>> {
    spawn_task(async move {
        let query = QueryParams::new()
            .push_opt("state", request.state.map(|s| s.as_str()))
            .push_opt("head", request.head)
            .push_opt("base", request.base)
            .push_opt("sort", request.sort.map(|s| s.as_str()))
            .push_opt("direction", request.direction.map(|d| d.as_str()))
            .push_opt("page", request.page)
            .push_opt("per_page", request.per_page);

        gateway
            .get(
                format!("{}/pulls", repo_path(&request.owner, &request.repo)),
                query,
            )
            .await?
            .json()
    })
}
