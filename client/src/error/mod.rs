pub mod api;

pub use api::{DeezerApiError, ErrorCode};

use deezer_models::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

/// The one error type every operation of this client surfaces.
///
/// Each variant keeps the original cause (where one exists) and the source
/// location of the classification, so nothing is lost between the wire and
/// the caller.
#[derive(Debug, ThisError)]
pub enum DeezerClientError {
    /// The global registry was required but never initialized.
    #[error("Configuration Error: {message} {location}")]
    Configuration {
        message: String,
        location: ErrorLocation,
    },

    /// The transport reported a request timeout, regardless of status.
    #[error("Network Timeout: {message} {location}")]
    NetworkTimeout {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<reqwest::Error>,
    },

    /// 5xx-class response from the API host.
    #[error("Server Unavailable: HTTP {status} - {message} {location}")]
    ServerUnavailable {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// The API's own error envelope, under any transport status.
    #[error(transparent)]
    Api(#[from] DeezerApiError),

    /// HTTP 200 with a bare JSON boolean body, the API's convention for
    /// unsupported or unauthorized queries.
    #[error("Boolean Body Error: API responded with boolean `{value}` {location}")]
    BooleanBody {
        value: bool,
        location: ErrorLocation,
    },

    /// Typed decoding of a validated response body failed.
    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
        #[source]
        source: url::ParseError,
    },

    /// A caller-supplied argument was rejected before any request was made.
    #[error("Invalid Argument: {message} {location}")]
    InvalidArgument {
        message: String,
        location: ErrorLocation,
    },

    /// Anything the validator could not classify. The original cause rides
    /// along for diagnostics.
    #[error("Unclassified Error: {message} {location}")]
    Unclassified {
        message: String,
        location: ErrorLocation,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl From<url::ParseError> for DeezerClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        DeezerClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}

/// Transport failures split into the timeout classification and everything
/// else. 5xx statuses never reach this conversion; the validator claims them
/// from the buffered response first.
impl From<reqwest::Error> for DeezerClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if error.is_timeout() {
            DeezerClientError::NetworkTimeout {
                message: error.to_string(),
                location,
                source: Some(error),
            }
        } else {
            DeezerClientError::Unclassified {
                message: error.to_string(),
                location,
                source: Some(Box::new(error)),
            }
        }
    }
}

impl From<serde_json::Error> for DeezerClientError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        DeezerClientError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: error,
        }
    }
}
