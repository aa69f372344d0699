//! Retry middleware for idempotent requests.
//!
//! The resource client never retries on its own. Wrapping the transport with
//! [`RetryLayer`](tower::retry::RetryLayer) and [`RetryPolicy`] opts into
//! retries for methods that are safe to repeat.

use std::future;

use bytes::Bytes;
use tower::retry::Policy;

use crate::{Request, Response, TransportError};

/// A retry policy limited to idempotent requests.
///
/// GET, PUT and DELETE are retried on:
/// - connection errors and timeouts
/// - 5xx server errors
/// - 429 Too Many Requests
///
/// POST and PATCH are never retried, whatever the outcome.
///
/// # Example
///
/// ```ignore
/// use restkit::HyperTransport;
/// use restkit::middleware::{RetryLayer, RetryPolicy};
///
/// let transport = HyperTransport::builder()
///     .layer(RetryLayer::new(RetryPolicy::new(3)))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    remaining: u32,
}

impl RetryPolicy {
    /// Create a new retry policy with the given maximum number of retries.
    #[must_use]
    pub fn new(max_retries: u32) -> Self {
        Self {
            remaining: max_retries,
        }
    }

    /// Retries left before the policy gives up.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    fn should_retry_request(request: &Request<Bytes>) -> bool {
        request.method().is_idempotent()
    }

    fn should_retry_response(response: &Response<Bytes>) -> bool {
        let status = response.status();
        status >= 500 || status == 429
    }

    fn should_retry_error(error: &TransportError) -> bool {
        error.is_connection() || error.is_timeout()
    }
}

impl Policy<Request<Bytes>, Response<Bytes>, TransportError> for RetryPolicy {
    type Future = future::Ready<()>;

    fn retry(
        &mut self,
        req: &mut Request<Bytes>,
        result: &mut Result<Response<Bytes>, TransportError>,
    ) -> Option<Self::Future> {
        if self.remaining == 0 || !Self::should_retry_request(req) {
            return None;
        }

        let should_retry = match result {
            Ok(response) => Self::should_retry_response(response),
            Err(error) => Self::should_retry_error(error),
        };

        if should_retry {
            self.remaining -= 1;
            tracing::debug!(
                method = %req.method(),
                url = %req.url(),
                remaining = self.remaining,
                "retrying request"
            );
            Some(future::ready(()))
        } else {
            None
        }
    }

    fn clone_request(&mut self, req: &Request<Bytes>) -> Option<Request<Bytes>> {
        // Non-idempotent requests are never replayed, so skip the copy
        Self::should_retry_request(req).then(|| req.clone())
    }
}
