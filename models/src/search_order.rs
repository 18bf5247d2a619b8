use serde::{Deserialize, Serialize};

/// Result ordering for the search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SearchOrder {
    Ranking,
    TrackAsc,
    TrackDesc,
    ArtistAsc,
    ArtistDesc,
    AlbumAsc,
    AlbumDesc,
    RatingAsc,
    RatingDesc,
    DurationAsc,
    DurationDesc,
}

impl SearchOrder {
    /// The query-parameter value the API expects.
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchOrder::Ranking => "RANKING",
            SearchOrder::TrackAsc => "TRACK_ASC",
            SearchOrder::TrackDesc => "TRACK_DESC",
            SearchOrder::ArtistAsc => "ARTIST_ASC",
            SearchOrder::ArtistDesc => "ARTIST_DESC",
            SearchOrder::AlbumAsc => "ALBUM_ASC",
            SearchOrder::AlbumDesc => "ALBUM_DESC",
            SearchOrder::RatingAsc => "RATING_ASC",
            SearchOrder::RatingDesc => "RATING_DESC",
            SearchOrder::DurationAsc => "DURATION_ASC",
            SearchOrder::DurationDesc => "DURATION_DESC",
        }
    }
}
