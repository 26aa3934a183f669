//! Timer helpers for UI tasks.

/// Suspend the current task for `ms` milliseconds.
///
/// Browser builds await a `setTimeout` promise, native builds the tokio timer.
pub async fn sleep_ms(ms: u64) {
    #[cfg(target_arch = "wasm32")]
    {
        let ms = u32::try_from(ms).unwrap_or(u32::MAX);
        gloo_timers::future::TimeoutFuture::new(ms).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    #[tokio::test]
    async fn sleeps_at_least_the_requested_time() {
        let started = Instant::now();
        sleep_ms(20).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
