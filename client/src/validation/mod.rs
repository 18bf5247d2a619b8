//! Response classification for the Deezer API.
//!
//! The API does not follow ordinary HTTP-status conventions: some failures
//! arrive as HTTP 200 with an error envelope, others as HTTP 200 with a bare
//! JSON boolean, others as real 4xx/5xx statuses. Every response body is
//! buffered exactly once by the caller; this module probes that buffer and
//! decides whether the response may proceed to typed decoding.

use crate::error::{DeezerApiError, DeezerClientError};

use deezer_models::{ErrorContainer, ErrorLocation};

use std::panic::Location;

use log::warn;
use reqwest::StatusCode;

const BODY_EXCERPT_LIMIT: usize = 200;

/// Classifies one buffered response.
///
/// `Ok(())` means the body is safe to hand to the typed decoder. Transport
/// failures (timeouts, connection errors) never reach this function; they are
/// classified by the `From<reqwest::Error>` conversion at the await points.
pub fn validate(
    status: StatusCode,
    content_type: Option<&str>,
    body: &[u8],
) -> Result<(), DeezerClientError> {
    if status.is_server_error() {
        warn!("Deezer API unavailable: HTTP {status}");
        return Err(DeezerClientError::ServerUnavailable {
            status: status.as_u16(),
            message: excerpt(body),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if !status.is_success() {
        // Non-2xx bodies usually still carry the error envelope. When they
        // don't, the probe failure must not leak as a decode error.
        return Err(match serde_json::from_slice::<ErrorContainer>(body) {
            Ok(container) => envelope_failure(container, status),
            Err(probe) => DeezerClientError::Unclassified {
                message: format!("HTTP {} with unrecognized body: {}", status.as_u16(), excerpt(body)),
                location: ErrorLocation::from(Location::caller()),
                source: Some(Box::new(probe)),
            },
        });
    }

    if is_json(content_type) {
        // The envelope probe runs first: `{"error":{...}}` under HTTP 200 is
        // still an API failure.
        if let Ok(container) = serde_json::from_slice::<ErrorContainer>(body) {
            return Err(envelope_failure(container, status));
        }
        if let Ok(value) = serde_json::from_slice::<bool>(body) {
            warn!("Deezer API responded HTTP {status} with bare boolean `{value}`");
            return Err(DeezerClientError::BooleanBody {
                value,
                location: ErrorLocation::from(Location::caller()),
            });
        }
    }

    Ok(())
}

fn envelope_failure(container: ErrorContainer, status: StatusCode) -> DeezerClientError {
    let detail = container.error;
    warn!(
        "Deezer API error envelope under HTTP {status}: code {} ({})",
        detail.code, detail.kind
    );
    DeezerApiError::new(Some(detail.code), detail.message).into()
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|value| value.to_ascii_lowercase().contains("json"))
}

fn excerpt(body: &[u8]) -> String {
    let text = String::from_utf8_lossy(body);
    let trimmed = text.trim();
    if trimmed.len() > BODY_EXCERPT_LIMIT {
        let mut cut = BODY_EXCERPT_LIMIT;
        while !trimmed.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...", &trimmed[..cut])
    } else {
        trimmed.to_string()
    }
}
