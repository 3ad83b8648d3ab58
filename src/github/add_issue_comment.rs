//! GitHub Issue comment creation operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::{Value, json};
use std::sync::Arc;

/// Add a comment to an issue or pull request.
pub(crate) fn add_issue_comment(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
    body: impl Into<String>,
) -> AsyncTask<GitHubResult<Value>> {
    let (owner, repo, body) = (owner.into(), repo.into(), body.into());
    spawn_task(async move {
        gateway
            .post(
                format!("{}/issues/{issue_number}/comments", repo_path(&owner, &repo)),
                json!({ "body": body }),
            )
            .await?
            .json()
    })
}
