//! GitHub issue listing tool

use crate::github::{
    Direction, GitHubClient, GitHubResult, IssueSort, ListIssuesRequest, StateFilter,
};
use crate::tool::{FieldViolation, Tool};
use chrono::DateTime;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

/// Arguments for `list_issues`
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct ListIssuesArgs {
    /// Repository owner (username or organization)
    #[schemars(length(min = 1))]
    pub owner: String,
    /// Repository name
    #[schemars(length(min = 1))]
    pub repo: String,
    /// Filter by state
    #[serde(default)]
    pub state: Option<StateFilter>,
    /// Filter by labels; issues must carry all of them
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    /// Sort field
    #[serde(default)]
    pub sort: Option<IssueSort>,
    /// Sort direction
    #[serde(default)]
    pub direction: Option<Direction>,
    /// Only issues updated at or after this time (ISO 8601 / RFC 3339)
    #[serde(default)]
    pub since: Option<String>,
    /// Page number for pagination
    #[serde(default)]
    #[schemars(range(min = 1))]
    pub page: Option<u32>,
    /// Results per page (max 100)
    #[serde(default)]
    #[schemars(range(min = 1, max = 100))]
    pub per_page: Option<u32>,
}

/// Tool for listing and filtering repository issues
#[derive(Clone)]
pub struct ListIssuesTool;

impl Tool for ListIssuesTool {
    type Args = ListIssuesArgs;

    fn name() -> &'static str {
        "list_issues"
    }

    fn description() -> &'static str {
        "List issues in a GitHub repository with filtering options"
    }

    fn read_only() -> bool {
        true
    }

    fn idempotent() -> bool {
        true
    }

    fn validate(args: &Value) -> Vec<FieldViolation> {
        let since = args.get("since").and_then(Value::as_str);
        match since.map(DateTime::parse_from_rfc3339) {
            Some(Err(e)) => vec![FieldViolation::new(
                "since",
                format!("must be an RFC 3339 timestamp ({e})"),
            )],
            _ => Vec::new(),
        }
    }

    async fn execute(&self, client: &GitHubClient, args: Self::Args) -> GitHubResult<Value> {
        let request = ListIssuesRequest {
            owner: args.owner,
            repo: args.repo,
            state: args.state,
            labels: args.labels,
            sort: args.sort,
            direction: args.direction,
            since: args.since,
            page: args.page,
            per_page: args.per_page,
        };
        client.list_issues(request).await?
    }
}
