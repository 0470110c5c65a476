//! Maps a raw transport outcome onto success or an [`Error`] category.

use crate::{transport::TransportOutcome, Error};

/// Returns the body of a successful response, or the error category the
/// outcome falls into.
///
/// Checks run in a fixed order: transport failure, missing status, then the
/// status range. A 2xx response without a body (or with an empty one) is
/// [`Error::InvalidData`]. Non-2xx responses are classified by status alone;
/// their bodies are only logged.
pub fn classify(outcome: TransportOutcome) -> Result<Vec<u8>, Error> {
    let response = outcome.map_err(|e| {
        tracing::error!("Transport failed: {}", e);
        Error::RequestFailed(e.message)
    })?;

    let Some(status) = response.status else {
        tracing::error!("Response carried no HTTP status");
        return Err(Error::ResponseUnsuccessful);
    };

    match status {
        200..=299 => match response.body {
            Some(body) if !body.is_empty() => Ok(body),
            _ => {
                tracing::error!("Status {} with an empty body", status);
                Err(Error::InvalidData)
            }
        },
        400..=499 => {
            log_failure(status, response.body.as_deref());
            Err(Error::NotFound { status })
        }
        500..=599 => {
            log_failure(status, response.body.as_deref());
            Err(Error::BadRequest { status })
        }
        _ => {
            log_failure(status, response.body.as_deref());
            Err(Error::UnknownError { status })
        }
    }
}

fn log_failure(status: u16, body: Option<&[u8]>) {
    let snippet = body
        .map(|b| truncate_body(&String::from_utf8_lossy(b)))
        .unwrap_or_default();
    tracing::error!("Request failed with status {}: {}", status, snippet);
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
