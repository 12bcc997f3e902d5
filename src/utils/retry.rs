//! Retry driver.
//!
//! Retries are blind: every error, whatever its category, consumes one attempt.
//! After the last attempt the final error is returned unchanged.

use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::RetryPolicy;
use crate::error_handling::{get_retry_strategy, ClientError};

/// Runs `operation` until it succeeds or the policy's attempt budget is spent.
///
/// # Arguments
///
/// * `policy` - Attempt budget and backoff
/// * `label` - Describes the operation in log lines (never includes credentials)
/// * `operation` - Produces a fresh future for each attempt
pub(crate) async fn with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    label: &str,
    mut operation: F,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let max_attempts = policy.max_attempts.max(1);
    let attempt_count = AtomicUsize::new(0);

    let result = tokio_retry::Retry::start(get_retry_strategy(policy), || {
        let attempt = attempt_count.fetch_add(1, Ordering::SeqCst) + 1;
        let fut = operation();
        async move {
            let result = fut.await;
            if let Err(e) = &result {
                if attempt < max_attempts {
                    log::warn!(
                        "{label}: attempt {attempt}/{max_attempts} failed ({}), retrying: {e}",
                        e.kind()
                    );
                }
            }
            result
        }
    })
    .await;

    if let Err(e) = &result {
        log::error!(
            "{label}: giving up after {} attempt(s): {e}",
            attempt_count.load(Ordering::SeqCst)
        );
    }
    result
}
