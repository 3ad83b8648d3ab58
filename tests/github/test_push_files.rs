//! Tests for the five-step multi-file commit.

use crate::common::{ScriptedTransport, client, created, failure, ok};
use github_mcp_tools::github::{ErrorKind, FileContent, Method};
use serde_json::json;

fn files() -> Vec<FileContent> {
    vec![
        FileContent {
            path: "README.md".into(),
            content: "# hello\n".into(),
        },
        FileContent {
            path: "src/lib.rs".into(),
            content: "pub fn answer() -> u32 { 42 }\n".into(),
        },
    ]
}

#[tokio::test]
async fn test_push_files_runs_steps_in_order() {
    let transport = ScriptedTransport::new([
        ok(json!({ "ref": "refs/heads/main", "object": { "sha": "c0" } })),
        ok(json!({ "sha": "c0", "tree": { "sha": "t0" } })),
        created(json!({ "sha": "t1" })),
        created(json!({ "sha": "c1" })),
        ok(json!({ "ref": "refs/heads/main", "object": { "sha": "c1" } })),
    ]);
    let gh = client(&transport);

    let result = gh
        .push_files("octo", "demo", "main", files(), "Add files")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(result["object"]["sha"], "c1");

    assert_eq!(
        transport.calls(),
        vec![
            (Method::GET, "/repos/octo/demo/git/ref/heads/main".to_string()),
            (Method::GET, "/repos/octo/demo/git/commits/c0".to_string()),
            (Method::POST, "/repos/octo/demo/git/trees".to_string()),
            (Method::POST, "/repos/octo/demo/git/commits".to_string()),
            (Method::PATCH, "/repos/octo/demo/git/refs/heads/main".to_string()),
        ]
    );

    let requests = transport.requests();
    assert_eq!(
        requests[2].body,
        Some(json!({
            "base_tree": "t0",
            "tree": [
                { "path": "README.md", "mode": "100644", "type": "blob", "content": "# hello\n" },
                { "path": "src/lib.rs", "mode": "100644", "type": "blob", "content": "pub fn answer() -> u32 { 42 }\n" },
            ],
        }))
    );
    assert_eq!(
        requests[3].body,
        Some(json!({ "message": "Add files", "tree": "t1", "parents": ["c0"] }))
    );
    assert_eq!(requests[4].body, Some(json!({ "sha": "c1" })));
}

#[tokio::test]
async fn test_push_files_single_file_makes_one_commit() {
    let transport = ScriptedTransport::new([
        ok(json!({ "ref": "refs/heads/main", "object": { "sha": "c0" } })),
        ok(json!({ "sha": "c0", "tree": { "sha": "t0" } })),
        created(json!({ "sha": "t1" })),
        created(json!({ "sha": "c1" })),
        ok(json!({ "ref": "refs/heads/main", "object": { "sha": "c1" } })),
    ]);
    let gh = client(&transport);

    let single = vec![FileContent {
        path: "CHANGELOG.md".into(),
        content: "## 0.1.0\n".into(),
    }];
    gh.push_files("octo", "demo", "main", single, "Add changelog")
        .await
        .unwrap()
        .unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[2].body,
        Some(json!({
            "base_tree": "t0",
            "tree": [
                { "path": "CHANGELOG.md", "mode": "100644", "type": "blob", "content": "## 0.1.0\n" },
            ],
        }))
    );

    let commits: Vec<_> = requests
        .iter()
        .filter(|r| r.method == Method::POST && r.path == "/repos/octo/demo/git/commits")
        .collect();
    assert_eq!(commits.len(), 1);
    assert_eq!(
        commits[0].body,
        Some(json!({ "message": "Add changelog", "tree": "t1", "parents": ["c0"] }))
    );
    assert_eq!(transport.remaining(), 0);
}

#[tokio::test]
async fn test_push_files_stops_at_first_failure() {
    let transport = ScriptedTransport::new([
        ok(json!({ "object": { "sha": "c0" } })),
        ok(json!({ "tree": { "sha": "t0" } })),
        failure(422, "tree.path contains a malformed path component"),
    ]);
    let gh = client(&transport);

    let err = gh
        .push_files("octo", "demo", "main", files(), "Add files")
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Generic));

    // No commit and no ref update after the tree failed
    assert_eq!(transport.requests().len(), 3);
    assert_eq!(transport.remaining(), 0);
}

#[tokio::test]
async fn test_push_files_missing_branch_is_not_found() {
    let transport = ScriptedTransport::new([failure(404, "Not Found")]);
    let gh = client(&transport);

    let err = gh
        .push_files("octo", "demo", "nope", files(), "Add files")
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::NotFound));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn test_push_files_reports_failed_ref_update() {
    let transport = ScriptedTransport::new([
        ok(json!({ "object": { "sha": "c0" } })),
        ok(json!({ "tree": { "sha": "t0" } })),
        created(json!({ "sha": "t1" })),
        created(json!({ "sha": "c1" })),
        failure(422, "Update is not a fast forward"),
    ]);
    let gh = client(&transport);

    let err = gh
        .push_files("octo", "demo", "main", files(), "Add files")
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.to_string(), "GitHub API Error: Update is not a fast forward");
    assert_eq!(transport.requests().len(), 5);
}

#[tokio::test]
async fn test_push_files_encodes_branch_in_ref_path() {
    let transport = ScriptedTransport::new([failure(404, "Not Found")]);
    let gh = client(&transport);

    let _ = gh
        .push_files("octo", "demo", "feature/new ui", files(), "msg")
        .await
        .unwrap();
    assert_eq!(
        transport.requests()[0].path,
        "/repos/octo/demo/git/ref/heads/feature/new%20ui"
    );
}
