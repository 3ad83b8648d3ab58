//! GitHub API utilities

use crate::runtime::AsyncTask;
use std::fmt::Display;
use std::future::Future;

/// Spawn an async task for GitHub API operations.
///
/// This is a convenience wrapper around `AsyncTask::spawn_async`.
#[inline]
pub fn spawn_task<T, F>(work: F) -> AsyncTask<T>
where
    T: Send + 'static,
    F: Future<Output = T> + Send + 'static,
{
    AsyncTask::spawn_async(work)
}

/// Query string parameters for a GET call.
///
/// Absent values are never emitted; list values are joined with commas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn push(mut self, key: &str, value: impl Display) -> Self {
        self.pairs.push((key.to_string(), value.to_string()));
        self
    }

    #[must_use]
    pub fn push_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    #[must_use]
    pub fn push_list<S: AsRef<str>>(self, key: &str, values: Option<&[S]>) -> Self {
        match values {
            Some(items) => {
                let joined = items.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
                self.push(key, joined)
            }
            None => self,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    #[must_use]
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Value for `key`, if it was pushed.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Percent-encode every segment of a slash-separated path, keeping the slashes.
#[must_use]
pub fn encode_path(path: &str) -> String {
    path.trim_matches('/')
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// `/repos/{owner}/{repo}` with both segments encoded.
#[must_use]
pub fn repo_path(owner: &str, repo: &str) -> String {
    format!(
        "/repos/{}/{}",
        urlencoding::encode(owner),
        urlencoding::encode(repo)
    )
}
