//! Tests for the gateway: verbs, query strings, and single classification.

use crate::common::{ScriptedTransport, failure, ok};
use github_mcp_tools::github::{ErrorKind, Gateway, Method, QueryParams, RemoteResponse};
use serde_json::{Value, json};

#[tokio::test]
async fn test_get_sends_query_and_returns_body() {
    let transport = ScriptedTransport::new([ok(json!({ "id": 7 }))]);
    let gateway = Gateway::new(transport.clone());

    let response = gateway
        .get("/user", QueryParams::new().push("page", 2))
        .await
        .unwrap();
    let value: Value = response.json().unwrap();
    assert_eq!(value["id"], 7);

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/user");
    assert_eq!(requests[0].query.get("page"), Some("2"));
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn test_write_verbs_carry_body() {
    let transport = ScriptedTransport::new([
        ok(json!({})),
        ok(json!({})),
        ok(json!({})),
        RemoteResponse::new(204, ""),
    ]);
    let gateway = Gateway::new(transport.clone());

    gateway.post("/a", json!({ "x": 1 })).await.unwrap();
    gateway.patch("/b", json!({ "x": 2 })).await.unwrap();
    gateway.put("/c", json!({ "x": 3 })).await.unwrap();
    let deleted = gateway.delete("/d").await.unwrap();
    assert_eq!(deleted.json::<Value>().unwrap(), Value::Null);

    let requests = transport.requests();
    let methods: Vec<_> = requests.iter().map(|r| r.method.clone()).collect();
    assert_eq!(
        methods,
        vec![Method::POST, Method::PATCH, Method::PUT, Method::DELETE]
    );
    assert_eq!(requests[2].body, Some(json!({ "x": 3 })));
    assert_eq!(requests[3].body, None);
}

#[tokio::test]
async fn test_non_success_is_classified() {
    let transport = ScriptedTransport::new([
        failure(403, "API rate limit exceeded").with_rate_limit_remaining("0"),
        failure(403, "Resource not accessible by integration").with_rate_limit_remaining("4999"),
    ]);
    let gateway = Gateway::new(transport);

    let err = gateway.get("/x", QueryParams::new()).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::RateLimit));
    assert!(err.to_string().ends_with("Please try again later."));

    let err = gateway.get("/y", QueryParams::new()).await.unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Permission));
}

#[tokio::test]
async fn test_undecodable_success_body_is_unclassified() {
    let transport = ScriptedTransport::new([RemoteResponse::new(200, "not json")]);
    let gateway = Gateway::new(transport);

    let response = gateway.get("/x", QueryParams::new()).await.unwrap();
    let err = response.json::<Value>().unwrap_err();
    assert_eq!(err.kind(), None);
}
