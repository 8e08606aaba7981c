//! Timeout wrapper for browser page operations

use std::future::Future;
use std::time::Duration;

use super::FetchError;

/// Run a page operation with an explicit timeout
///
/// Distinguishes between the operation failing and the deadline passing.
pub async fn with_page_timeout<F, T>(
    operation: F,
    timeout_secs: u64,
    operation_name: &'static str,
) -> Result<T, FetchError>
where
    F: Future<Output = Result<T, FetchError>>,
{
    match tokio::time::timeout(Duration::from_secs(timeout_secs), operation).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout {
            operation: operation_name,
            secs: timeout_secs,
        }),
    }
}
