//! # Scheduler
//!
//! Runs a task once after a delay on the host's event loop.

use std::time::Duration;

use futures::future::LocalBoxFuture;

/// Deferred execution seam.
///
/// The browser build backs this with `setTimeout`; native hosts use
/// [`TokioScheduler`].
pub trait Scheduler: Send + Sync {
    /// Run `task` once, no earlier than `delay` from now. Fire-and-forget.
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>);
}

/// Tokio-backed scheduler.
///
/// Tasks are spawned with [`tokio::task::spawn_local`], so `schedule` must be
/// called from inside a [`tokio::task::LocalSet`].
#[cfg(any(test, feature = "tokio"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

#[cfg(any(test, feature = "tokio"))]
impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            task.await;
        });
    }
}
