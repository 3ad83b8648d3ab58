//! GitHub File creation/update operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{encode_path, repo_path, spawn_task};
use crate::runtime::AsyncTask;
use base64::{Engine as _, engine::general_purpose};
use log::debug;
use serde_json::{Value, json};
use std::sync::Arc;

/// Request parameters for creating or updating a file
#[derive(Debug, Clone)]
pub struct CreateOrUpdateFileRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Path to the file in the repository
    pub path: String,
    /// Commit message
    pub message: String,
    /// Plain file content, base64 encoded before sending
    pub content: String,
    /// Branch to commit to
    pub branch: String,
    /// SHA of the file being replaced (required for updates, omit for creates)
    pub sha: Option<String>,
}

/// Create **or** update a single file.
///
/// Both are a `PUT` on the contents endpoint; the presence of `sha` is what
/// makes it an update.
pub(crate) fn create_or_update_file(
    gateway: Arc<Gateway>,
    request: CreateOrUpdateFileRequest,
) -> AsyncTask<GitHubResult<Value>> {
    spawn_task(async move {
        let endpoint = format!(
            "{}/contents/{}",
            repo_path(&request.owner, &request.repo),
            encode_path(&request.path)
        );

        let mut body = json!({
            "message": request.message,
            "content": general_purpose::STANDARD.encode(request.content.as_bytes()),
            "branch": request.branch,
        });

        match request.sha {
            Some(existing_sha) => {
                debug!("updating {} (replacing {existing_sha})", request.path);
                body["sha"] = json!(existing_sha);
            }
            None => debug!("creating {}", request.path),
        }

        gateway.put(endpoint, body).await?.json()
    })
}
