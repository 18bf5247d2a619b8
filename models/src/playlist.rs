use crate::paginated_response::PaginatedResponse;
use crate::track::Track;
use crate::user::User;

use serde::{Deserialize, Serialize};

/// A Playlist object of the [Deezer API](https://developers.deezer.com/api/playlist).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: i64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(rename = "public", default)]
    pub is_public: bool,
    #[serde(
        rename = "is_loved_track",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_loved_track: Option<bool>,
    #[serde(
        rename = "collaborative",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub is_collaborative: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(
        rename = "nb_tracks",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub track_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unseen_track_count: Option<u32>,
    #[serde(rename = "fans", default, skip_serializing_if = "Option::is_none")]
    pub fan_count: Option<u32>,
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
    pub picture_type: Option<String>,
    /// Checksum for the track list. Opaque, passed through unvalidated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
    /// Chart responses ship this field as `user`.
    #[serde(alias = "user", default, skip_serializing_if = "Option::is_none")]
    pub creator: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<PaginatedResponse<Track>>,
    /// For example "2014-06-27 04:09:31".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5_image: Option<String>,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
    /// Only present on chart responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracklist: Option<String>,
}

fn default_type() -> String {
    "playlist".to_string()
}
