//! Minimal typed views of remote responses.
//!
//! Only the fields the orchestrations consume are modelled; every other
//! response is passed through as untyped JSON.

use serde::{Deserialize, Serialize};

/// Git mode of a regular, non-executable file.
pub const REGULAR_FILE_MODE: &str = "100644";

/// `GET /repos/{owner}/{repo}` → `{default_branch}`
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryInfo {
    pub default_branch: String,
}

/// `{sha}` of any git object.
#[derive(Debug, Clone, Deserialize)]
pub struct GitObject {
    pub sha: String,
}

/// `GET .../git/refs/heads/{branch}` → `{object:{sha}}`
#[derive(Debug, Clone, Deserialize)]
pub struct GitReference {
    pub object: GitObject,
}

/// `GET .../git/commits/{sha}` → `{tree:{sha}}`
#[derive(Debug, Clone, Deserialize)]
pub struct GitCommit {
    pub tree: GitObject,
}

/// One entry of a tree-creation request. Content is sent literally and
/// hashed by the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GitTreeEntry {
    pub path: String,
    pub mode: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub content: String,
}

impl GitTreeEntry {
    #[must_use]
    pub fn blob(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            mode: REGULAR_FILE_MODE,
            kind: "blob",
            content: content.into(),
        }
    }
}

/// A file to commit with `push_files`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FileContent {
    /// Path of the file relative to the repository root
    pub path: String,
    /// Full text content of the file
    pub content: String,
}
