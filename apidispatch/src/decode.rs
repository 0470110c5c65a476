//! Generic JSON decoding of a successful response body.

use serde::de::DeserializeOwned;

use crate::{classify::truncate_body, Error};

/// Decodes `bytes` into `T`. Malformed or mismatched payloads become
/// [`Error::JsonDecodingError`].
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, Error> {
    serde_json::from_slice::<T>(bytes).map_err(|e| {
        let snippet = truncate_body(&String::from_utf8_lossy(bytes));
        tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
        Error::JsonDecodingError(e.to_string())
    })
}
