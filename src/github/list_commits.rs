//! GitHub repository commits listing operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{QueryParams, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// Options for listing commits in a repository.
#[derive(Debug, Clone, Default)]
pub struct ListCommitsOptions {
    /// SHA or branch to start listing commits from.
    pub sha: Option<String>,
    /// Page number of results to return.
    pub page: Option<u32>,
    /// Number of results per page (max 100).
    pub per_page: Option<u32>,
}

/// List commits in a repository.
pub(crate) fn list_commits(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    options: ListCommitsOptions,
) -> AsyncTask<GitHubResult<Value>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let query = QueryParams::new()
            .push_opt("sha", options.sha)
            .push_opt("page", options.page)
            .push_opt("per_page", options.per_page);

        gateway
            .get(format!("{}/commits", repo_path(&owner, &repo)), query)
            .await?
            .json()
    })
}
