//! GitHub Pull Request creation operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::{Value, json};
use std::sync::Arc;

/// Request parameters for creating a pull request
#[derive(Debug, Clone)]
pub struct CreatePullRequestRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Pull request title
    pub title: String,
    /// Pull request body/description
    pub body: Option<String>,
    /// Branch or commit SHA where changes are implemented
    pub head: String,
    /// Branch to merge into
    pub base: String,
    /// Whether to create as draft pull request
    pub draft: Option<bool>,
    /// Whether maintainers can modify the pull request
    pub maintainer_can_modify: Option<bool>,
}

/// Create a pull-request.
pub(crate) fn create_pull_request(
    gateway: Arc<Gateway>,
    request: CreatePullRequestRequest,
) -> AsyncTask<GitHubResult<Value>> {
    spawn_task(async move {
        let mut body = json!({
            "title": request.title,
            "head": request.head,
            "base": request.base,
        });

        if let Some(b) = request.body {
            body["body"] = json!(b);
        }
        if let Some(d) = request.draft {
            body["draft"] = json!(d);
        }
        if let Some(m) = request.maintainer_can_modify {
            body["maintainer_can_modify"] = json!(m);
        }

        gateway
            .post(
                format!("{}/pulls", repo_path(&request.owner, &request.repo)),
                body,
            )
            .await?
            .json()
    })
}
