//! Best-effort, non-blocking dispatch of network writes.
//!
//! Used for interaction logging: the caller never awaits the write, never
//! retries it, and never shows its failure to the user. Failures only reach
//! the debug log.

use std::future::Future;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Spawn `work` and forget about it.
    pub fn fire<F>(&self, label: &'static str, work: F)
    where
        F: Future<Output = Result<(), ClientError>> + Send + 'static,
    {
        tokio::spawn(async move {
            if let Err(e) = work.await {
                tracing::debug!(label, error = %e, "Best-effort dispatch failed");
            }
        });
    }
}
