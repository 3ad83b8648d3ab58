//! Tests for the async task handle.

use github_mcp_tools::runtime::AsyncTask;
use github_mcp_tools::GitHubError;
use tokio::sync::oneshot;

#[tokio::test]
async fn test_async_task_spawn_async() {
    let task = AsyncTask::spawn_async(async { 42 });
    let result = task.await.unwrap();
    assert_eq!(result, 42);
}

#[tokio::test]
async fn test_async_task_from_receiver() {
    let (tx, rx) = oneshot::channel();
    let task = AsyncTask::new(rx);
    tx.send("done").unwrap();
    assert_eq!(task.await.unwrap(), "done");
}

#[tokio::test]
async fn test_dropped_sender_becomes_task_error() {
    let (tx, rx) = oneshot::channel::<u32>();
    drop(tx);

    let recv_err = AsyncTask::new(rx).await.unwrap_err();
    let err = GitHubError::from(recv_err);
    assert!(matches!(err, GitHubError::TaskFailed(_)));
    assert_eq!(err.kind(), None);
}
