//! Per-request upper bound on entity store calls.

use std::future::Future;
use std::time::Duration;

use crate::errors::DomainError;

/// Store calls made while serving a request fail after this long
pub const DEFAULT_STORE_DEADLINE: Duration = Duration::from_secs(10);

/// Run a store operation, failing with an internal error once `deadline` passes.
///
/// No retry is attempted.
pub async fn within_deadline<T, F>(deadline: Duration, operation: F) -> Result<T, DomainError>
where
    F: Future<Output = Result<T, DomainError>>,
{
    match tokio::time::timeout(deadline, operation).await {
        Ok(result) => result,
        Err(_) => Err(DomainError::internal(format!(
            "store call exceeded the {}ms deadline",
            deadline.as_millis()
        ))),
    }
}
