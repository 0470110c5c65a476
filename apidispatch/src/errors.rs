//! Error types for the dispatch pipeline.

/// Every way a single dispatch can fail.
///
/// The set is closed: each stage of the pipeline maps its failures onto one
/// of these variants, and nothing else ever reaches the caller. The HTTP
/// status buckets keep their historical names, so a 4xx response is reported
/// as [`Error::NotFound`] and a 5xx response as [`Error::BadRequest`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Scheme, host and path did not compose into an absolute URL.
    #[error("Invalid URL")]
    InvalidUrl,
    /// The endpoint declined to produce a request for its current case.
    #[error("Invalid request")]
    InvalidRequest,
    /// The transport failed before any HTTP response was received.
    #[error("Request failed: {0}")]
    RequestFailed(String),
    /// The transport answered without an HTTP status.
    #[error("Response unsuccessful")]
    ResponseUnsuccessful,
    /// A 2xx response arrived with an empty or unreadable body.
    #[error("Invalid data")]
    InvalidData,
    /// The body did not match the requested type.
    #[error("JSON decoding error: {0}")]
    JsonDecodingError(String),
    /// Any status in 400..=499.
    #[error("Not found (HTTP {status})")]
    NotFound { status: u16 },
    /// Any status in 500..=599.
    #[error("Bad request (HTTP {status})")]
    BadRequest { status: u16 },
    /// Any status outside the 2xx, 4xx and 5xx ranges.
    #[error("Unknown error (HTTP {status})")]
    UnknownError { status: u16 },
}

impl Error {
    /// The HTTP status behind this error, if the server produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::NotFound { status }
            | Error::BadRequest { status }
            | Error::UnknownError { status } => Some(*status),
            _ => None,
        }
    }
}
