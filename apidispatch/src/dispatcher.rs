//! End-to-end execution of one endpoint call.

use serde::de::DeserializeOwned;

use crate::{
    classify::classify,
    decode::decode,
    endpoint::Endpoint,
    request::build,
    transport::Transport,
    Error,
};

/// Runs endpoints through build, send, classify and decode.
///
/// The transport is injected at construction; there is no shared default.
/// A dispatcher holds no per-call state, so one instance can serve any
/// number of concurrent dispatches.
///
/// Every dispatch resolves exactly once. Dropping the returned future before
/// it completes drops the in-flight transport future with it, and no result
/// is produced. No timeout is applied here; use the transport's.
#[derive(Clone, Debug)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: Transport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Dispatches `endpoint` and decodes the response body into `R`.
    pub async fn dispatch<R, E>(&self, endpoint: &E) -> Result<R, Error>
    where
        R: DeserializeOwned,
        E: Endpoint + ?Sized,
    {
        let body = self.dispatch_bytes(endpoint).await?;
        decode::<R>(&body)
    }

    /// Dispatches `endpoint` and returns the raw body of a 2xx response.
    pub async fn dispatch_bytes<E>(&self, endpoint: &E) -> Result<Vec<u8>, Error>
    where
        E: Endpoint + ?Sized,
    {
        let request = build(&endpoint)?;
        tracing::debug!("{} {}", request.method, request.url);
        let outcome = self.transport.send(request).await;
        let body = classify(outcome)?;
        tracing::debug!("Received {} bytes", body.len());
        Ok(body)
    }

    /// Dispatches `endpoint` and hands the result to `on_complete`.
    ///
    /// The callback runs exactly once, on the task that awaits this future.
    /// If the future is dropped first, the callback never runs.
    pub async fn dispatch_with<R, E, F>(&self, endpoint: &E, on_complete: F)
    where
        R: DeserializeOwned,
        E: Endpoint + ?Sized,
        F: FnOnce(Result<R, Error>),
    {
        let result = self.dispatch::<R, E>(endpoint).await;
        on_complete(result);
    }
}
