//! GitHub Issue retrieval operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{QueryParams, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// Get a single issue.
pub(crate) fn get_issue(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    issue_number: u64,
) -> AsyncTask<GitHubResult<Value>> {
    let owner = owner.into();
    let repo = repo.into();
    spawn_task(async move {
        gateway
            .get(
                format!("{}/issues/{issue_number}", repo_path(&owner, &repo)),
                QueryParams::new(),
            )
            .await?
            .json()
    })
}
