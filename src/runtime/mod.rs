//! Runtime module
//!
//! Provides the async task handle returned by every GitHub operation.

pub mod async_task;

pub use async_task::AsyncTask;
