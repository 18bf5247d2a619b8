use crate::radio::Radio;

use serde::{Deserialize, Serialize};

/// A Genre object of the [Deezer API](https://developers.deezer.com/api/genre).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i64,
    /// Some radio endpoints ship this field as `title`.
    #[serde(alias = "title")]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_big: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picture_xl: Option<String>,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    /// Only present on `radio/genres` responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radios: Option<Vec<Radio>>,
}

fn default_type() -> String {
    "genre".to_string()
}
