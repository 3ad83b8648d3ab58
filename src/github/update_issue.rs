//! GitHub Issue update operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::params::IssueState;
use crate::github::util::{repo_path, spawn_task};
use crate::runtime::AsyncTask;
use serde_json::{Value, json};
use std::sync::Arc;

/// Request parameters for updating an issue
#[derive(Debug, Clone)]
pub struct UpdateIssueRequest {
    /// Repository owner (user or organization)
    pub owner: String,
    /// Repository name
    pub repo: String,
    /// Issue number to update
    pub issue_number: u64,
    /// New title for the issue
    pub title: Option<String>,
    /// New body/description for the issue
    pub body: Option<String>,
    /// New state (open or closed)
    pub state: Option<IssueState>,
    /// New labels
    pub labels: Option<Vec<String>>,
    /// New assignees
    pub assignees: Option<Vec<String>>,
    /// New milestone number
    pub milestone: Option<u64>,
}

/// Update an existing issue. Only fields that are present are sent.
pub(crate) fn update_issue(
    gateway: Arc<Gateway>,
    request: UpdateIssueRequest,
) -> AsyncTask<GitHubResult<Value>> {
    spawn_task(async move {
        let mut body = json!({});

        if let Some(t) = request.title {
            body["title"] = json!(t);
        }
        if let Some(b) = request.body {
            body["body"] = json!(b);
        }
        if let Some(s) = request.state {
            body["state"] = json!(s.as_str());
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
            .patch(
                format!(
                    "{}/issues/{}",
                    repo_path(&request.owner, &request.repo),
                    request.issue_number
                ),
                body,
            )
            .await?
            .json()
    })
}
