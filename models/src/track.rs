use crate::album::Album;
use crate::artist::Artist;
use crate::explicit::Explicit;

use serde::{Deserialize, Serialize};

/// A Track object of the [Deezer API](https://developers.deezer.com/api/track).
///
/// Search and list endpoints return a reduced field set; `reload` through the
/// client fetches the full object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_short: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_version: Option<String>,
    /// Whether the track is readable in the player for the current user.
    #[serde(
        rename = "readable",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_readable: Option<bool>,
    #[serde(
        rename = "unseen",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_unseen: Option<bool>,
    /// International Standard Recording Code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isrc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
    /// Duration in seconds.
    #[serde(default)]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disk_number: Option<u32>,
    #[serde(default)]
    pub rank: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(default)]
    pub explicit_lyrics: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content_lyrics: Option<Explicit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content_cover: Option<Explicit>,
    /// URL of a file with the first 30 seconds of the track.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm: Option<f32>,
    /// Signal strength.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gain: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_countries: Option<Vec<String>>,
    /// An alternative readable track if this one is not readable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative: Option<Box<Track>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<Artist>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<Album>,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    /// Only present on chart responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    /// Only present on playlist responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_add: Option<i64>,
}

fn default_type() -> String {
    "track".to_string()
}
