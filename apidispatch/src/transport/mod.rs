//! The network boundary of the pipeline.
//!
//! A [`Transport`] is the only component that performs I/O. It is handed to
//! the dispatcher at construction time, so tests can substitute a fake that
//! returns canned outcomes. Timeouts and connection reuse are the
//! transport's business; the dispatcher enforces neither.

mod http;
pub use self::http::ReqwestTransport;

use std::future::Future;
use std::sync::Arc;

use crate::request::TransportRequest;

/// What came back from the wire, before any interpretation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status, or `None` when the peer did not answer with one.
    pub status: Option<u16>,
    pub headers: Vec<(String, String)>,
    /// Raw body, or `None` when it could not be read.
    pub body: Option<Vec<u8>>,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status: Some(status),
            headers: Vec::new(),
            body: Some(body.into()),
        }
    }

    /// A response carrying a status and no body.
    pub fn empty(status: u16) -> Self {
        Self {
            status: Some(status),
            headers: Vec::new(),
            body: None,
        }
    }
}

/// The transport failed before an HTTP response existed (DNS, refused
/// connection, TLS, timeout).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct TransportError {
    pub message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Exactly one of a response or a transport-level failure.
pub type TransportOutcome = Result<TransportResponse, TransportError>;

/// Sends one request and reports what happened.
///
/// Implementations must be safe to share between concurrent dispatches.
pub trait Transport: Send + Sync {
    fn send(&self, request: TransportRequest) -> impl Future<Output = TransportOutcome> + Send;
}

impl<T: Transport> Transport for Arc<T> {
    fn send(&self, request: TransportRequest) -> impl Future<Output = TransportOutcome> + Send {
        (**self).send(request)
    }
}

impl<T: Transport> Transport for &T {
    fn send(&self, request: TransportRequest) -> impl Future<Output = TransportOutcome> + Send {
        (**self).send(request)
    }
}
