//! GitHub commit retrieval operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{QueryParams, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// Get a specific commit by SHA. Page/per_page apply to the commit's file list.
pub(crate) fn get_commit(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    sha: impl Into<String>,
    page: Option<u32>,
    per_page: Option<u32>,
) -> AsyncTask<GitHubResult<Value>> {
    let owner = owner.into();
    let repo = repo.into();
    let sha = sha.into();

    spawn_task(async move {
        let query = QueryParams::new()
            .push_opt("page", page)
            .push_opt("per_page", per_page);

        gateway
            .get(
                format!(
                    "{}/commits/{}",
                    repo_path(&owner, &repo),
                    urlencoding::encode(&sha)
                ),
                query,
            )
            .await?
            .json()
    })
}
