//! Tests for argument validation, routing, and error sorting in `invoke`.

use crate::common::{ScriptedTransport, created, failure, ok};
use github_mcp_tools::github::{ErrorKind, Method, RemoteResponse};
use github_mcp_tools::{DispatchError, Dispatcher, FieldViolation, GitHubClient};
use serde_json::{Value, json};
use std::sync::Arc;

fn dispatcher(transport: &Arc<ScriptedTransport>) -> Dispatcher {
    Dispatcher::new(GitHubClient::with_transport(transport.clone())).unwrap()
}

fn violated_fields(err: &DispatchError) -> Vec<String> {
    match err {
        DispatchError::InvalidInput(violations) => {
            violations.iter().map(|v| v.field.clone()).collect()
        }
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unknown_tool() {
    let transport = ScriptedTransport::empty();
    let err = dispatcher(&transport)
        .invoke("delete_everything", json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, DispatchError::UnknownTool(_)));
    assert_eq!(err.to_string(), "Unknown tool: delete_everything");
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_missing_fields_are_reported_together() {
    let transport = ScriptedTransport::empty();
    let err = dispatcher(&transport)
        .invoke("create_issue", json!({ "repo": "demo" }))
        .await
        .unwrap_err();

    let mut fields = violated_fields(&err);
    fields.sort();
    assert_eq!(fields, vec!["owner", "title"]);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_null_arguments_are_an_empty_bag() {
    let transport = ScriptedTransport::empty();
    let err = dispatcher(&transport)
        .invoke("get_issue", Value::Null)
        .await
        .unwrap_err();

    let mut fields = violated_fields(&err);
    fields.sort();
    assert_eq!(fields, vec!["issue_number", "owner", "repo"]);
}

#[tokio::test]
async fn test_type_and_enum_violations() {
    let transport = ScriptedTransport::empty();
    let err = dispatcher(&transport)
        .invoke(
            "update_issue",
            json!({ "owner": "octo", "repo": "demo", "issue_number": "5", "state": "merged" }),
        )
        .await
        .unwrap_err();

    let fields = violated_fields(&err);
    assert!(fields.contains(&"issue_number".to_string()));
    assert!(fields.contains(&"state".to_string()));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_pagination_bounds() {
    let transport = ScriptedTransport::empty();
    let dispatcher = dispatcher(&transport);

    let err = dispatcher
        .invoke("search_code", json!({ "q": "x", "page": 0, "per_page": 101 }))
        .await
        .unwrap_err();
    let mut fields = violated_fields(&err);
    fields.sort();
    assert_eq!(fields, vec!["page", "per_page"]);

    let err = dispatcher
        .invoke("list_commits", json!({ "owner": "o", "repo": "r", "perPage": 0 }))
        .await
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["perPage"]);
}

#[tokio::test]
async fn test_since_must_be_rfc3339() {
    let transport = ScriptedTransport::empty();
    let err = dispatcher(&transport)
        .invoke(
            "list_issues",
            json!({ "owner": "octo", "repo": "demo", "since": "last tuesday" }),
        )
        .await
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["since"]);
}

#[tokio::test]
async fn test_push_files_needs_files() {
    let transport = ScriptedTransport::empty();
    let dispatcher = dispatcher(&transport);
    let base = json!({ "owner": "o", "repo": "r", "branch": "main", "message": "m" });

    let mut bag = base.clone();
    bag["files"] = json!([]);
    let err = dispatcher.invoke("push_files", bag).await.unwrap_err();
    assert_eq!(violated_fields(&err), vec!["files"]);

    let mut bag = base;
    bag["files"] = json!([{ "path": "a.txt" }, { "path": " ", "content": "x" }]);
    let err = dispatcher.invoke("push_files", bag).await.unwrap_err();
    let mut fields = violated_fields(&err);
    fields.sort();
    assert_eq!(fields, vec!["files[0].content", "files[1].path"]);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_structural_and_semantic_violations_are_reported_together() {
    let transport = ScriptedTransport::empty();
    let dispatcher = dispatcher(&transport);

    let err = dispatcher
        .invoke("list_issues", json!({ "repo": "r", "since": "last tuesday" }))
        .await
        .unwrap_err();
    let mut fields = violated_fields(&err);
    fields.sort();
    assert_eq!(fields, vec!["owner", "since"]);

    let err = dispatcher
        .invoke(
            "push_files",
            json!({
                "owner": "o",
                "repo": "r",
                "branch": "main",
                "files": [{ "path": " ", "content": "x" }],
            }),
        )
        .await
        .unwrap_err();
    let mut fields = violated_fields(&err);
    fields.sort();
    assert_eq!(fields, vec!["files[0].path", "message"]);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_empty_names_are_rejected() {
    let transport = ScriptedTransport::empty();
    let dispatcher = dispatcher(&transport);

    let err = dispatcher
        .invoke(
            "create_branch",
            json!({ "owner": "o", "repo": "r", "branch": "" }),
        )
        .await
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["branch"]);

    let err = dispatcher
        .invoke("search_code", json!({ "q": "" }))
        .await
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["q"]);
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn test_empty_source_branch_falls_back_to_default() {
    let transport = ScriptedTransport::new([
        ok(json!({ "name": "r", "default_branch": "main" })),
        ok(json!({ "object": { "sha": "abc123" } })),
        created(json!({ "ref": "refs/heads/feature" })),
    ]);
    dispatcher(&transport)
        .invoke(
            "create_branch",
            json!({ "owner": "o", "repo": "r", "branch": "feature", "from_branch": "" }),
        )
        .await
        .unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            (Method::GET, "/repos/o/r".to_string()),
            (Method::GET, "/repos/o/r/git/ref/heads/main".to_string()),
            (Method::POST, "/repos/o/r/git/refs".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_whole_float_is_accepted_as_integer() {
    let transport = ScriptedTransport::new([ok(json!({ "number": 7, "title": "t" }))]);
    dispatcher(&transport)
        .invoke(
            "get_issue",
            json!({ "owner": "octo", "repo": "demo", "issue_number": 7.0 }),
        )
        .await
        .unwrap();
    assert_eq!(transport.requests()[0].path, "/repos/octo/demo/issues/7");
}

#[tokio::test]
async fn test_blank_file_path_rejected_after_decoding() {
    let transport = ScriptedTransport::empty();
    let err = dispatcher(&transport)
        .invoke(
            "push_files",
            json!({
                "owner": "o",
                "repo": "r",
                "branch": "main",
                "message": "m",
                "files": [{ "path": " ", "content": "x" }],
            }),
        )
        .await
        .unwrap_err();
    assert_eq!(violated_fields(&err), vec!["files[0].path"]);
}

#[test]
fn test_invalid_input_rendering() {
    let err = DispatchError::InvalidInput(vec![
        FieldViolation::new("owner", "is required"),
        FieldViolation::new("page", "must be >= 1"),
    ]);
    let rendered = err.to_string();
    let payload = rendered.strip_prefix("Invalid input: ").unwrap();
    let parsed: Value = serde_json::from_str(payload).unwrap();
    assert_eq!(
        parsed,
        json!([
            { "field": "owner", "message": "is required" },
            { "field": "page", "message": "must be >= 1" },
        ])
    );
}

#[tokio::test]
async fn test_valid_call_reaches_the_operation() {
    let transport = ScriptedTransport::new([created(json!({ "full_name": "me/fresh" }))]);
    let result = dispatcher(&transport)
        .invoke(
            "create_repository",
            json!({ "name": "fresh", "autoInit": true, "private": false }),
        )
        .await
        .unwrap();
    assert_eq!(result["full_name"], "me/fresh");

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.path, "/user/repos");
    assert_eq!(
        request.body,
        Some(json!({ "name": "fresh", "private": false, "auto_init": true }))
    );
}

#[tokio::test]
async fn test_renamed_paging_field_is_forwarded() {
    let transport = ScriptedTransport::new([ok(json!([]))]);
    dispatcher(&transport)
        .invoke(
            "list_commits",
            json!({ "owner": "octo", "repo": "demo", "perPage": 10, "page": 2 }),
        )
        .await
        .unwrap();

    let query = transport.requests()[0].query.clone();
    assert_eq!(query.get("per_page"), Some("10"));
    assert_eq!(query.get("page"), Some("2"));
}

#[tokio::test]
async fn test_remote_conflict_is_classified() {
    let transport = ScriptedTransport::new([failure(409, "name already exists on this account")]);
    let err = dispatcher(&transport)
        .invoke("create_repository", json!({ "name": "taken" }))
        .await
        .unwrap_err();

    match &err {
        DispatchError::Remote(remote) => assert_eq!(remote.kind(), Some(ErrorKind::Conflict)),
        other => panic!("expected remote error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "Conflict Error: name already exists on this account. The operation conflicts with the current state."
    );
}

#[tokio::test]
async fn test_rate_limit_carries_retry_hint() {
    let transport = ScriptedTransport::new([
        failure(403, "API rate limit exceeded").with_rate_limit_remaining("0"),
    ]);
    let err = dispatcher(&transport)
        .invoke("search_users", json!({ "q": "rust" }))
        .await
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Rate Limit Error: API rate limit exceeded. Please try again later."
    );
}

#[tokio::test]
async fn test_unclassified_failure_passes_through() {
    let transport = ScriptedTransport::new([RemoteResponse::new(200, "<html>")]);
    let err = dispatcher(&transport)
        .invoke(
            "get_issue",
            json!({ "owner": "octo", "repo": "demo", "issue_number": 1 }),
        )
        .await
        .unwrap_err();

    match err {
        DispatchError::Unexpected(inner) => assert_eq!(inner.kind(), None),
        other => panic!("expected unexpected error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_validate_has_no_side_effects() {
    let transport = ScriptedTransport::empty();
    let dispatcher = dispatcher(&transport);

    dispatcher
        .validate("get_issue", &json!({ "owner": "o", "repo": "r", "issue_number": 3 }))
        .unwrap();
    assert!(dispatcher.validate("get_issue", &json!({})).is_err());
    assert!(transport.requests().is_empty());
}
