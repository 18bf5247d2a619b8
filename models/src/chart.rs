use crate::album::Album;
use crate::artist::Artist;
use crate::paginated_response::PaginatedResponse;
use crate::playlist::Playlist;
use crate::podcast::Podcast;
use crate::track::Track;

use serde::{Deserialize, Serialize};

/// Charts of the whole catalog or of one genre.
///
/// Composite of five independent paginated windows. The windows carry their
/// own `total`/continuation fields; the API is known to report `total = 0` on
/// one window while a sibling window is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub tracks: PaginatedResponse<Track>,
    #[serde(default)]
    pub albums: PaginatedResponse<Album>,
    #[serde(default)]
    pub artists: PaginatedResponse<Artist>,
    #[serde(default)]
    pub playlists: PaginatedResponse<Playlist>,
    #[serde(default)]
    pub podcasts: PaginatedResponse<Podcast>,
}
