//! Search API methods

use super::GitHubClient;
use crate::github::error::GitHubResult;
use crate::github::{IssueSearchSort, SearchOrder, UserSearchSort};
use crate::runtime::AsyncTask;
use serde_json::Value;

impl GitHubClient {
    /// Search code
    pub fn search_code(
        &self,
        query: impl Into<String>,
        order: Option<SearchOrder>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::search_code::search_code(self.gateway.clone(), query, order, page, per_page)
    }

    /// Search repositories
    pub fn search_repositories(
        &self,
        query: impl Into<String>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::search_repositories::search_repositories(
            self.gateway.clone(),
            query,
            page,
            per_page,
        )
    }

    /// Search issues and pull requests
    pub fn search_issues(
        &self,
        query: impl Into<String>,
        sort: Option<IssueSearchSort>,
        order: Option<SearchOrder>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::search_issues::search_issues(
            self.gateway.clone(),
            query,
            sort,
            order,
            page,
            per_page,
        )
    }

    /// Search users
    pub fn search_users(
        &self,
        query: impl Into<String>,
        sort: Option<UserSearchSort>,
        order: Option<SearchOrder>,
        page: Option<u32>,
        per_page: Option<u32>,
    ) -> AsyncTask<GitHubResult<Value>> {
        crate::github::search_users::search_users(
            self.gateway.clone(),
            query,
            sort,
            order,
            page,
            per_page,
        )
    }
}
