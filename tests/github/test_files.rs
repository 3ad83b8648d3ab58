//! Tests for repository, fork, and file-content operations.

use crate::common::{ScriptedTransport, client, created, failure, ok};
use github_mcp_tools::github::{CreateOrUpdateFileRequest, ErrorKind, Method};
use serde_json::json;

fn file_request(sha: Option<&str>) -> CreateOrUpdateFileRequest {
    CreateOrUpdateFileRequest {
        owner: "octo".into(),
        repo: "demo".into(),
        path: "docs/guide.md".into(),
        message: "Update guide".into(),
        content: "hello".into(),
        branch: "main".into(),
        sha: sha.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_file_encodes_content_and_omits_sha() {
    let transport = ScriptedTransport::new([created(json!({ "content": { "sha": "f1" } }))]);
    let gh = client(&transport);

    gh.create_or_update_file(file_request(None))
        .await
        .unwrap()
        .unwrap();

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::PUT);
    assert_eq!(request.path, "/repos/octo/demo/contents/docs/guide.md");
    assert_eq!(
        request.body,
        Some(json!({ "message": "Update guide", "content": "aGVsbG8=", "branch": "main" }))
    );
}

#[tokio::test]
async fn test_update_file_sends_sha() {
    let transport = ScriptedTransport::new([ok(json!({ "content": { "sha": "f2" } }))]);
    let gh = client(&transport);

    gh.create_or_update_file(file_request(Some("f1")))
        .await
        .unwrap()
        .unwrap();

    let body = transport.requests()[0].body.clone().unwrap();
    assert_eq!(body["sha"], "f1");
}

#[tokio::test]
async fn test_stale_sha_is_conflict() {
    let transport = ScriptedTransport::new([failure(409, "docs/guide.md does not match f1")]);
    let gh = client(&transport);

    let err = gh
        .create_or_update_file(file_request(Some("f1")))
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Conflict));
}

#[tokio::test]
async fn test_get_file_contents_passes_ref() {
    let transport = ScriptedTransport::new([
        ok(json!({ "type": "file", "path": "a b.txt" })),
        ok(json!([{ "type": "dir", "path": "src" }])),
    ]);
    let gh = client(&transport);

    gh.get_file_contents("octo", "demo", "a b.txt", Some("dev".into()))
        .await
        .unwrap()
        .unwrap();
    let listing = gh
        .get_file_contents("octo", "demo", "", None)
        .await
        .unwrap()
        .unwrap();
    assert!(listing.is_array());

    let requests = transport.requests();
    assert_eq!(requests[0].path, "/repos/octo/demo/contents/a%20b.txt");
    assert_eq!(requests[0].query.get("ref"), Some("dev"));
    assert!(requests[1].query.is_empty());
}

#[tokio::test]
async fn test_create_repository_sends_only_present_fields() {
    let transport = ScriptedTransport::new([
        created(json!({ "full_name": "octo/fresh" })),
        created(json!({ "full_name": "octo/bare" })),
    ]);
    let gh = client(&transport);

    gh.create_repository("fresh", Some("A repo".into()), Some(false), Some(true))
        .await
        .unwrap()
        .unwrap();
    gh.create_repository("bare", None, None, None)
        .await
        .unwrap()
        .unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].path, "/user/repos");
    assert_eq!(
        requests[0].body,
        Some(json!({ "name": "fresh", "description": "A repo", "private": false, "auto_init": true }))
    );
    assert_eq!(requests[1].body, Some(json!({ "name": "bare" })));
}

#[tokio::test]
async fn test_fork_into_organization() {
    let transport = ScriptedTransport::new([
        ok(json!({ "full_name": "acme/demo" })),
        ok(json!({ "full_name": "me/demo" })),
    ]);
    let gh = client(&transport);

    gh.fork_repository("octo", "demo", Some("acme".into()))
        .await
        .unwrap()
        .unwrap();
    gh.fork_repository("octo", "demo", None).await.unwrap().unwrap();

    let requests = transport.requests();
    assert_eq!(requests[0].path, "/repos/octo/demo/forks");
    assert_eq!(requests[0].body, Some(json!({ "organization": "acme" })));
    assert_eq!(requests[1].body, Some(json!({})));
}
