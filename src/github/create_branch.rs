//! GitHub Branch creation operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::models::{GitReference, RepositoryInfo};
use crate::github::util::{QueryParams, encode_path, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use log::debug;
use serde_json::{Value, json};
use std::sync::Arc;

/// Create `branch` at the current head of `from_branch`, or of the
/// repository's default branch when no source (or a blank one) is given.
///
/// No reference is created unless the source head was resolved.
pub(crate) fn create_branch(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
    from_branch: Option<String>,
) -> AsyncTask<GitHubResult<Value>> {
    let (owner, repo, branch) = (owner.into(), repo.into(), branch.into());
    spawn_task(async move {
        let base = repo_path(&owner, &repo);

        let source = match from_branch.filter(|source| !source.trim().is_empty()) {
            Some(source) => source,
            None => {
                let info: RepositoryInfo = gateway
                    .get(base.as_str(), QueryParams::new())
                    .await?
                    .json()?;
                debug!("create_branch: default branch of {owner}/{repo} is {}", info.default_branch);
                info.default_branch
            }
        };

        let reference: GitReference = gateway
            .get(
                format!("{base}/git/ref/heads/{}", encode_path(&source)),
                QueryParams::new(),
            )
            .await?
            .json()?;

        gateway
            .post(
                format!("{base}/git/refs"),
                json!({
                    "ref": format!("refs/heads/{branch}"),
                    "sha": reference.object.sha,
                }),
            )
            .await?
            .json()
    })
}
