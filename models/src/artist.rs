use serde::{Deserialize, Serialize};

/// An Artist object of the [Deezer API](https://developers.deezer.com/api/artist).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: i64,
    pub name: String,
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
    #[serde(
        rename = "nb_album",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub album_count: Option<u32>,
    #[serde(rename = "nb_fan", default, skip_serializing_if = "Option::is_none")]
    pub fan_count: Option<u32>,
    /// Whether the artist has a smart radio.
    #[serde(rename = "radio", default, skip_serializing_if = "Option::is_none")]
    pub is_radio: Option<bool>,
    /// API link to the top tracks of this artist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracklist: Option<String>,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    /// Only present on contributor lists ("Main", "Featured", ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Only present on chart responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

fn default_type() -> String {
    "artist".to_string()
}
