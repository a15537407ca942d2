//! Bounded retry loop for remote calls.

use log::{info, warn};
use std::future::Future;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryConfig {
    /// Total attempts, the first one included. Zero behaves as one.
    pub max_attempts: u32,
    /// Fixed pause between attempts.
    pub delay: Duration,
}

impl RetryConfig {
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        RetryConfig {
            max_attempts,
            delay,
        }
    }

    pub fn listing() -> Self {
        RetryConfig::new(5, Duration::from_millis(250))
    }

    pub fn fetch() -> Self {
        RetryConfig::new(2, Duration::from_millis(250))
    }
}

/// Runs `operation` until it succeeds, fails with an error `is_retryable`
/// rejects, or `config.max_attempts` is used up. Returns the last error.
pub async fn with_retry<F, Fut, T, E, R>(
    config: &RetryConfig,
    what: &str,
    mut operation: F,
    is_retryable: R,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: std::fmt::Display,
    R: Fn(&E) -> bool,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match operation().await {
            Ok(v) => {
                if attempt > 1 {
                    info!("{} succeeded after {} attempts", what, attempt);
                }
                return Ok(v);
            }
            Err(e) if is_retryable(&e) && attempt < max_attempts => {
                warn!(
                    "{} failed ({}), attempt {}/{}. Retrying...",
                    what, e, attempt, max_attempts
                );
                attempt += 1;
                if !config.delay.is_zero() {
                    tokio::time::sleep(config.delay).await;
                }
            }
            Err(e) => return Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    const NO_DELAY: RetryConfig = RetryConfig::new(3, Duration::from_millis(0));

    #[tokio::test]
    async fn stops_at_max_attempts() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retry(
            &NO_DELAY,
            "op",
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("down".to_owned())
            },
            |_| true,
        )
        .await;
        assert_eq!(result, Err("down".to_owned()));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn succeeds_after_transient() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = with_retry(
            &NO_DELAY,
            "op",
            || async {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                if n == 0 {
                    Err("blip".to_owned())
                } else {
                    Ok(n)
                }
            },
            |_| true,
        )
        .await;
        assert_eq!(result, Ok(1));
    }

    #[tokio::test]
    async fn permanent_error_is_not_retried() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retry(
            &NO_DELAY,
            "op",
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("fatal".to_owned())
            },
            |e: &String| e != "fatal",
        )
        .await;
        assert!(result.is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn zero_attempts_still_runs_once() {
        let calls = AtomicU32::new(0);
        let config = RetryConfig::new(0, Duration::from_millis(0));
        let _: Result<(), String> = with_retry(
            &config,
            "op",
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err("x".to_owned())
            },
            |_| true,
        )
        .await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
