//! Async delays on the browser event loop.

#![allow(clippy::unused_async)]

/// Suspend the current task for `ms` milliseconds.
///
/// Outside the browser this resolves immediately so polling loops can be
/// driven synchronously in tests.
pub async fn pause(ms: u32) {
    #[cfg(feature = "csr")]
    {
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ms;
    }
}
