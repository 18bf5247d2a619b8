use serde::{Deserialize, Serialize};

/// The error envelope of the [Deezer API](https://developers.deezer.com/api/errors).
///
/// The API wraps its own failures in this shape, sometimes under a 2xx
/// transport status. Consumed only; this client never produces it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContainer {
    pub error: ErrorDetail,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorDetail {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub code: u32,
}
