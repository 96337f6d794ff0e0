use std::time::Duration;

use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;
use lib_core::Scheduler;

/// `setTimeout`-backed scheduler on the browser event loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: LocalBoxFuture<'static, ()>) {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(millis).await;
            task.await;
        });
    }
}
