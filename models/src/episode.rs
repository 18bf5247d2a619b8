use crate::podcast::Podcast;

use serde::{Deserialize, Serialize};

/// An Episode object of the [Deezer API](https://developers.deezer.com/api/episode).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: i64,
    pub title: String,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(
        rename = "available",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_available: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
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
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub podcast: Option<Podcast>,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
}

fn default_type() -> String {
    "episode".to_string()
}
