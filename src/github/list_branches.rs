//! GitHub repository branches listing operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{QueryParams, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// List branches in a repository.
pub(crate) fn list_branches(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    protected: Option<bool>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> AsyncTask<GitHubResult<Value>> {
    let owner = owner.into();
    let repo = repo.into();

    spawn_task(async move {
        let query = QueryParams::new()
            .push_opt("protected", protected)
            .push_opt("page", page)
            .push_opt("per_page", per_page);

        gateway
            .get(format!("{}/branches", repo_path(&owner, &repo)), query)
            .await?
            .json()
    })
}
