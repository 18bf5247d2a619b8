use crate::artist::Artist;
use crate::explicit::Explicit;
use crate::genre::Genre;
use crate::paginated_response::PaginatedResponse;
use crate::track::Track;

use serde::{Deserialize, Serialize};

/// An Album object of the [Deezer API](https://developers.deezer.com/api/album).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: i64,
    pub title: String,
    /// Universal Product Code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub share: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_small: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_medium: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_big: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_xl: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub md5_image: Option<String>,
    /// First genre id. The API reports -1 when not found.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<PaginatedResponse<Genre>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(
        rename = "nb_tracks",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub track_count: Option<u32>,
    /// Duration in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fans: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    /// "single", "album", "compile", "ep" or "bundle".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
    /// An alternative album if this one is not available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alternative: Option<Box<Album>>,
    /// API link to the tracklist of this album.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracklist: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_lyrics: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content_lyrics: Option<Explicit>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content_cover: Option<Explicit>,
    /// Only present on chart responses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contributors: Option<Vec<Artist>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artist: Option<Artist>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracks: Option<PaginatedResponse<Track>>,
    #[serde(rename = "type", default = "default_type")]
    pub kind: String,
}

fn default_type() -> String {
    "album".to_string()
}
