//! GitHub Repository creation operation.

use crate::github::client::Gateway;
use crate::github::error::GitHubResult;
use crate::github::util::spawn_task;
use crate::runtime::AsyncTask;
use serde_json::{Value, json};
use std::sync::Arc;

/// Create a repository (user scope).
pub(crate) fn create_repository(
    gateway: Arc<Gateway>,
    name: impl Into<String>,
    description: Option<String>,
    private: Option<bool>,
    auto_init: Option<bool>,
) -> AsyncTask<GitHubResult<Value>> {
    let name = name.into();
    spawn_task(async move {
        let mut body = json!({
            "name": name,
        });

        if let Some(desc) = description {
            body["description"] = json!(desc);
        }
        if let Some(privy) = private {
            body["private"] = json!(privy);
        }
        if let Some(ai) = auto_init {
            body["auto_init"] = json!(ai);
        }

        gateway.post("/user/repos", body).await?.json()
    })
}
