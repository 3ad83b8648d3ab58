//! GitHub Issues listing operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::params::{Direction, IssueSort, StateFilter};
use crate::github::util::{QueryParams, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// Request parameters for listing issues
#[derive(Debug, Clone)]
pub struct ListIssuesRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Filter by issue state (open, closed, all)
    pub state: Option<StateFilter>,
    /// Filter by labels
    pub labels: Option<Vec<String>>,
    /// Sort field (created, updated, comments)
    pub sort: Option<IssueSort>,
    /// Sort direction (asc, desc)
    pub direction: Option<Direction>,
    /// Only issues updated after this time (RFC3339 timestamp)
    pub since: Option<String>,
    /// Page number for pagination
    pub page: Option<u32>,
    /// Results per page (max 100)
    pub per_page: Option<u32>,
}

/// List one page of issues with optional filters.
pub(crate) fn list_issues(
    gateway: Arc<Gateway>,
    request: ListIssuesRequest,
) -> AsyncTask<GitHubResult<Value>> {
    spawn_task(async move {
        let query = QueryParams::new()
            .push_opt("state", request.state.map(|s| s.as_str()))
            .push_opt("sort", request.sort.map(|s| s.as_str()))
            .push_opt("direction", request.direction.map(|d| d.as_str()))
            .push_opt("since", request.since)
            .push_list("labels", request.labels.as_deref())
            .push_opt("page", request.page)
            .push_opt("per_page", request.per_page);

        gateway
            .get(
                format!("{}/issues", repo_path(&request.owner, &request.repo)),
                query,
            )
            .await?
            .json()
    })
}
