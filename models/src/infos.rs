use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Information about the Deezer API in the current country.
///
/// The `offers` and `ads` regions have no stable documented shape, so they
/// are kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Infos {
    pub country_iso: String,
    pub country: String,
    #[serde(rename = "open", default)]
    pub is_open: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub offers: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pop: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_token_lifetime: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosts: Option<HostDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ads: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stream: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<String>,
}
