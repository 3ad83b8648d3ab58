//! GitHub Multiple files push operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::models::{FileContent, GitCommit, GitObject, GitReference, GitTreeEntry};
use crate::github::util::{QueryParams, encode_path, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use log::{debug, warn};
use serde_json::{Value, json};
use std::sync::Arc;

/// Push multiple files in **one** commit (tree + commit + update-ref).
///
/// 1. branch ref → latest commit sha
/// 2. latest commit → base tree sha
/// 3. new tree = base tree + one blob entry per file
/// 4. new commit (tree = new tree, parent = latest commit)
/// 5. move the branch ref to the new commit
///
/// Each step consumes the previous step's answer, so nothing runs in
/// parallel and nothing is retried. If step 5 fails the new commit and tree
/// stay on the remote unreferenced and the branch keeps its old head.
pub(crate) fn push_files(
    gateway: Arc<Gateway>,
    owner: impl Into<String>,
    repo: impl Into<String>,
    branch: impl Into<String>,
    files: Vec<FileContent>,
    message: impl Into<String>,
) -> AsyncTask<GitHubResult<Value>> {
    let (owner, repo, branch, message) = (owner.into(), repo.into(), branch.into(), message.into());

    spawn_task(async move {
        let base = repo_path(&owner, &repo);
        let branch_path = encode_path(&branch);

        // 1. Get latest commit SHA of branch
        let reference: GitReference = gateway
            .get(format!("{base}/git/ref/heads/{branch_path}"), QueryParams::new())
            .await?
            .json()?;
        let latest_commit_sha = reference.object.sha;
        debug!("push_files: {branch} is at {latest_commit_sha}");

        // 2. Get the tree of that commit
        let commit: GitCommit = gateway
            .get(
                format!("{base}/git/commits/{latest_commit_sha}"),
                QueryParams::new(),
            )
            .await?
            .json()?;
        let base_tree_sha = commit.tree.sha;

        // 3. Create tree
        let tree_entries: Vec<GitTreeEntry> = files
            .into_iter()
            .map(|file| GitTreeEntry::blob(file.path, file.content))
            .collect();
        debug!(
            "push_files: building tree with {} entries on {base_tree_sha}",
            tree_entries.len()
        );
        let tree: GitObject = gateway
            .post(
                format!("{base}/git/trees"),
                json!({
                    "base_tree": base_tree_sha,
                    "tree": tree_entries,
                }),
            )
            .await?
            .json()?;

        // 4. Create commit
        let new_commit: GitObject = gateway
            .post(
                format!("{base}/git/commits"),
                json!({
                    "message": message,
                    "tree": tree.sha,
                    "parents": [latest_commit_sha],
                }),
            )
            .await?
            .json()?;
        debug!("push_files: created commit {}", new_commit.sha);

        // 5. Update ref
        match gateway
            .patch(
                format!("{base}/git/refs/heads/{branch_path}"),
                json!({ "sha": new_commit.sha }),
            )
            .await
        {
            Ok(response) => response.json(),
            Err(err) => {
                warn!(
                    "push_files: commit {} was created but {branch} still points at {latest_commit_sha}",
                    new_commit.sha
                );
                Err(err)
            }
        }
    })
}
