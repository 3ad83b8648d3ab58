//! Tests for branch creation from an explicit or default source.

use crate::common::{ScriptedTransport, client, created, failure, ok};
use github_mcp_tools::github::{ErrorKind, Method};
use serde_json::json;

#[tokio::test]
async fn test_create_branch_from_named_source() {
    let transport = ScriptedTransport::new([
        ok(json!({ "ref": "refs/heads/develop", "object": { "sha": "abc123" } })),
        created(json!({ "ref": "refs/heads/feature", "object": { "sha": "abc123" } })),
    ]);
    let gh = client(&transport);

    let result = gh
        .create_branch("octo", "demo", "feature", Some("develop".into()))
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result["ref"], "refs/heads/feature");

    assert_eq!(
        transport.calls(),
        vec![
            (Method::GET, "/repos/octo/demo/git/ref/heads/develop".to_string()),
            (Method::POST, "/repos/octo/demo/git/refs".to_string()),
        ]
    );
    assert_eq!(
        transport.requests()[1].body,
        Some(json!({ "ref": "refs/heads/feature", "sha": "abc123" }))
    );
}

#[tokio::test]
async fn test_create_branch_defaults_to_repository_default_branch() {
    let transport = ScriptedTransport::new([
        ok(json!({ "name": "demo", "default_branch": "trunk" })),
        ok(json!({ "object": { "sha": "def456" } })),
        created(json!({ "ref": "refs/heads/feature" })),
    ]);
    let gh = client(&transport);

    gh.create_branch("octo", "demo", "feature", None)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            (Method::GET, "/repos/octo/demo".to_string()),
            (Method::GET, "/repos/octo/demo/git/ref/heads/trunk".to_string()),
            (Method::POST, "/repos/octo/demo/git/refs".to_string()),
        ]
    );
    assert_eq!(transport.requests()[2].body.as_ref().unwrap()["sha"], "def456");
}

#[tokio::test]
async fn test_create_branch_blank_source_uses_default_branch() {
    let transport = ScriptedTransport::new([
        ok(json!({ "name": "demo", "default_branch": "main" })),
        ok(json!({ "object": { "sha": "0a1b2c" } })),
        created(json!({ "ref": "refs/heads/feature" })),
    ]);
    let gh = client(&transport);

    gh.create_branch("octo", "demo", "feature", Some(String::new()))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        transport.calls(),
        vec![
            (Method::GET, "/repos/octo/demo".to_string()),
            (Method::GET, "/repos/octo/demo/git/ref/heads/main".to_string()),
            (Method::POST, "/repos/octo/demo/git/refs".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_create_branch_missing_source_creates_nothing() {
    let transport = ScriptedTransport::new([failure(404, "Not Found")]);
    let gh = client(&transport);

    let err = gh
        .create_branch("octo", "demo", "feature", Some("ghost".into()))
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
    assert!(transport.calls().iter().all(|(m, _)| *m == Method::GET));
}

#[tokio::test]
async fn test_create_branch_existing_reference_fails() {
    let transport = ScriptedTransport::new([
        ok(json!({ "object": { "sha": "abc123" } })),
        failure(422, "Reference already exists"),
    ]);
    let gh = client(&transport);

    let err = gh
        .create_branch("octo", "demo", "main", Some("main".into()))
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.message(), "Reference already exists");
}
