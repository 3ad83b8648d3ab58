//! Issues API methods

use super::GitHubClient;
use crate::github::error::GitHubResult;
use crate::runtime::AsyncTask;
use serde_json::Value;

impl GitHubClient {
    /// Get a single issue
    pub fn get_issue(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::get_issue::get_issue(self.gateway.clone(), owner, repo, issue_number)
    }

    /// Create a new issue
    #[must_use]
    pub fn create_issue(
        &self,
        request: crate::github::CreateIssueRequest,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::create_issue::create_issue(self.gateway.clone(), request)
    }

    /// Update an existing issue
    #[must_use]
    pub fn update_issue(
        &self,
        request: crate::github::UpdateIssueRequest,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::update_issue::update_issue(self.gateway.clone(), request)
    }

    /// List issues in a repository
    #[must_use]
    pub fn list_issues(
        &self,
        request: crate::github::ListIssuesRequest,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::list_issues::list_issues(self.gateway.clone(), request)
    }

    /// Add a comment to an issue
    pub fn add_issue_comment(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        issue_number: u64,
        body: impl Into<String>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::add_issue_comment::add_issue_comment(
            self.gateway.clone(),
            owner,
            repo,
            issue_number,
            body,
        )
    }
}
