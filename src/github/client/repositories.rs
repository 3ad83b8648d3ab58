//! Repositories API methods

use super::GitHubClient;
use crate::github::error::GitHubResult;
use crate::github::models::FileContent;
use crate::runtime::AsyncTask;
use serde_json::Value;

impl GitHubClient {
    /// Create a repository for the authenticated user
    pub fn create_repository(
        &self,
        name: impl Into<String>,
        description: Option<String>,
        private: Option<bool>,
        auto_init: Option<bool>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::create_repository::create_repository(
            self.gateway.clone(),
            name,
            description,
            private,
            auto_init,
        )
    }

    /// Fork a repository
    pub fn fork_repository(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        organization: Option<String>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::fork_repository::fork_repository(
            self.gateway.clone(),
            owner,
            repo,
            organization,
        )
    }

    /// Get file or directory contents
    pub fn get_file_contents(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        path: impl Into<String>,
        ref_name: Option<String>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::get_file_contents::get_file_contents(
            self.gateway.clone(),
            owner,
            repo,
            path,
            ref_name,
        )
    }

    /// Create or update a file
    #[must_use]
    pub fn create_or_update_file(
        &self,
        request: crate::github::CreateOrUpdateFileRequest,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::create_or_update_file::create_or_update_file(self.gateway.clone(), request)
    }

    /// Push files to a branch as a single commit
    pub fn push_files(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch: impl Into<String>,
        files: Vec<FileContent>,
        commit_message: impl Into<String>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::push_files::push_files(
            self.gateway.clone(),
            owner,
            repo,
            branch,
            files,
            commit_message,
        )
    }

    /// List branches
    pub fn list_branches(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        protected: Option<bool>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::list_branches::list_branches(
            self.gateway.clone(),
            owner,
            repo,
            protected,
            page,
            per_page,
        )
    }

    /// Create a branch from `from_branch`, or from the default branch
    pub fn create_branch(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        branch_name: impl Into<String>,
        from_branch: Option<String>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::create_branch::create_branch(
            self.gateway.clone(),
            owner,
            repo,
            branch_name,
            from_branch,
        )
    }

    /// List commits
    pub fn list_commits(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        options: crate::github::ListCommitsOptions,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::list_commits::list_commits(self.gateway.clone(), owner, repo, options)
    }

    /// Get a commit
    pub fn get_commit(
        &self,
        owner: impl Into<String>,
        repo: impl Into<String>,
        commit_sha: impl Into<String>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::get_commit::get_commit(
            self.gateway.clone(),
            owner,
            repo,
            commit_sha,
            page,
            per_page,
        )
    }
}
