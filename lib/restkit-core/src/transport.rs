//! The transport port.
//!
//! [`Transport`] performs exactly one HTTP exchange. The resource client only
//! ever talks to the network through it, which keeps the core independent of
//! any HTTP stack. Implement it to plug in a real client (see the `restkit`
//! crate's `HyperTransport`) or an in-memory backend for tests.

use std::future::Future;
use std::sync::Arc;

use bytes::Bytes;

use crate::{Request, Response, TransportError};

/// Single HTTP exchange.
///
/// Implementations must enforce [`Request::timeout`] when set and surface an
/// elapsed timeout as [`TransportError::Timeout`]. Redirects are not followed.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use bytes::Bytes;
/// use restkit_core::{Request, Response, Transport, TransportError};
///
/// /// Answers every request with an empty JSON array.
/// struct EmptyBackend;
///
/// impl Transport for EmptyBackend {
///     async fn exchange(&self, _request: Request<Bytes>) -> Result<Response<Bytes>, TransportError> {
///         Ok(Response::new(200, HashMap::new(), Bytes::from_static(b"[]")))
///     }
/// }
/// ```
pub trait Transport: Send + Sync {
    /// Execute the request and return the raw response.
    ///
    /// Any status code, including 4xx and 5xx, is a successful exchange.
    ///
    /// # Errors
    ///
    /// Returns an error only if the exchange did not complete:
    /// - Network errors (connection refused, DNS)
    /// - TLS errors
    /// - Timeouts
    /// - Requests that cannot be put on the wire
    fn exchange(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>, TransportError>> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn exchange(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>, TransportError>> + Send {
        self.as_ref().exchange(request)
    }
}

impl<T: Transport> Transport for &T {
    fn exchange(
        &self,
        request: Request<Bytes>,
    ) -> impl Future<Output = Result<Response<Bytes>, TransportError>> + Send {
        (**self).exchange(request)
    }
}
