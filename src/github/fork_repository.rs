//! GitHub Repository forking operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::{Value, json};
use std::sync::Arc;

/// Fork a repository, into `organization` when given.
pub(crate) fn fork_repository(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    organization: Option<String>,
) -> AsyncTask<GitHubResult<Value>> {
    let (owner, repo) = (owner.into(), repo.into());
    spawn_task(async move {
        let body = match organization {
            Some(org) => json!({ "organization": org }),
            None => json!({}),
        };

        gateway
            .post(format!("{}/forks", repo_path(&owner, &repo)), body)
            .await?
            .json()
    })
}
