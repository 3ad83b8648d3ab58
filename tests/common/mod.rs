//! Scripted in-memory transport shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use github_mcp_tools::github::{
    GitHubClient, GitHubError, GitHubResult, Method, RemoteRequest, RemoteResponse, Transport,
};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays canned responses in order and records every request it receives.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    responses: Mutex<VecDeque<RemoteResponse>>,
    requests: Mutex<Vec<RemoteRequest>>,
}

impl ScriptedTransport {
    pub fn new(responses: impl IntoIterator<Item = RemoteResponse>) -> Arc<Self> {
        Arc::new(Self {
            responses: Mutex::new(responses.into_iter().collect()),
            requests: Mutex::new(Vec::new()),
        })
    }

    /// A transport that must not be called.
    pub fn empty() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RemoteRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// `(method, path)` of every request, for order assertions.
    pub fn calls(&self) -> Vec<(Method, String)> {
        self.requests()
            .into_iter()
            .map(|r| (r.method, r.path))
            .collect()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: RemoteRequest) -> GitHubResult<RemoteResponse> {
        let path = request.path.clone();
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| GitHubError::ClientSetup(format!("no scripted response for {path}")))
    }
}

pub fn client(transport: &Arc<ScriptedTransport>) -> GitHubClient {
    GitHubClient::with_transport(transport.clone())
}

pub fn ok(body: Value) -> RemoteResponse {
    RemoteResponse::new(200, body.to_string())
}

pub fn created(body: Value) -> RemoteResponse {
    RemoteResponse::new(201, body.to_string())
}

pub fn failure(status: u16, message: &str) -> RemoteResponse {
    RemoteResponse::new(status, serde_json::json!({ "message": message }).to_string())
}
