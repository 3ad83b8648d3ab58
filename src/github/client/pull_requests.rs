//! Pull Requests API methods

use super::GitHubClient;
use crate::github::error::GitHubResult;
use crate::runtime::AsyncTask;
use serde_json::Value;

impl GitHubClient {
    /// Create a pull request
    #[must_use]
    pub fn create_pull_request(
        &self,
        request: crate::github::CreatePullRequestRequest,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::create_pull_request::create_pull_request(self.gateway.clone(), request)
    }

    /// List pull requests
    #[must_use]
    pub fn list_pull_requests(
        &self,
        request: crate::github::ListPullRequestsRequest,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::list_pull_requests::list_pull_requests(self.gateway.clone(), request)
    }
}
