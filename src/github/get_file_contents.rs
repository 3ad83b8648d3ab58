//! GitHub File contents retrieval operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{QueryParams, encode_path, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::Value;
use std::sync::Arc;

/// Retrieve file or directory contents, at `reference` when given.
pub(crate) fn get_file_contents(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    path: impl Into<String>,
    reference: Option<String>,
) -> AsyncTask<GitHubResult<Value>> {
    let (owner, repo, path) = (owner.into(), repo.into(), path.into());
    spawn_task(async move {
        let endpoint = format!("{}/contents/{}", repo_path(&owner, &repo), encode_path(&path));
        let query = QueryParams::new().push_opt("ref", reference);

        gateway.get(endpoint, query).await?.json()
    })
}
