//! Typed HTTP request dispatch.
//!
//! Describe a call as an [`Endpoint`], hand it to a [`Dispatcher`] built
//! around some [`Transport`], and get back either a decoded value or one
//! [`Error`] category.
//!
//! ```no_run
//! use apidispatch::{Dispatcher, EndpointDescriptor, Method, ReqwestTransport, TransportConfig};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = ReqwestTransport::new(&TransportConfig::from_env())?;
//! let dispatcher = Dispatcher::new(transport);
//! let ping = EndpointDescriptor::new(Method::Get, "api.coingecko.com", "/api/v3/ping");
//! let body: serde_json::Value = dispatcher.dispatch(&ping).await?;
//! # Ok(())
//! # }
//! ```

mod classify;
pub mod config;
mod decode;
mod dispatcher;
pub mod endpoint;
mod errors;
pub mod request;
pub mod transport;

pub use self::classify::classify;
pub use self::config::TransportConfig;
pub use self::decode::decode;
pub use self::dispatcher::Dispatcher;
pub use self::endpoint::{Encoding, Endpoint, EndpointDescriptor, Headers, Method, Parameters};
pub use self::errors::Error;
pub use self::request::{build, TransportRequest};
pub use self::transport::{
    ReqwestTransport, Transport, TransportError, TransportOutcome, TransportResponse,
};
