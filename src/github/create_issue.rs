//! GitHub Issue creation operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::{repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::{Value, json};
use std::sync::Arc;

/// Request parameters for creating an issue
#[derive(Debug, Clone)]
pub struct CreateIssueRequest {
    pub owner: String,
    pub repo: String,
    pub title: String,
    pub body: Option<String>,
    pub labels: Option<Vec<String>>,
    pub assignees: Option<Vec<String>>,
    /// Milestone number; sent whenever present, including 0
    pub milestone: Option<u64>,
}

/// Create a new issue.
pub(crate) fn create_issue(
    gateway: Arc<Gateway>,
    request: CreateIssueRequest,
) -> AsyncTask<GitHubResult<Value>> {
    spawn_task(async move {
        let mut body = json!({ "title": request.title });

        if let Some(b) = request.body {
            body["body"] = json!(b);
        }
        if let Some(lbs) = request.labels {
            body["labels"] = json!(lbs);
        }
        if let Some(asgs) = request.assignees {
            body["assignees"] = json!(asgs);
        }
        if let Some(ms) = request.milestone {
            body["milestone"] = json!(ms);
        }

        gateway
            .post(
                format!("{}/issues", repo_path(&request.owner, &request.repo)),
                body,
            )
            .await?
            .json()
    })
}
