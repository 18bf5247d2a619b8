//! One accessor struct per endpoint group, mirroring the API's URL layout.
//!
//! Every method issues exactly one GET and returns a typed body. Optional
//! `index`/`limit` window parameters are appended only when present.

pub mod album;
pub mod artist;
pub mod chart;
pub mod editorial;
pub mod episode;
pub mod genre;
pub mod infos;
pub mod options;
pub mod playlist;
pub mod podcast;
pub mod radio;
pub mod search;
pub mod track;
pub mod user;

pub use album::AlbumRoutes;
pub use artist::ArtistRoutes;
pub use chart::ChartRoutes;
pub use editorial::EditorialRoutes;
pub use episode::EpisodeRoutes;
pub use genre::GenreRoutes;
pub use infos::InfosRoute;
pub use options::OptionsRoute;
pub use playlist::PlaylistRoutes;
pub use podcast::PodcastRoutes;
pub use radio::RadioRoutes;
pub use search::{AdvancedQueryBuilder, SearchRoutes};
pub use track::TrackRoutes;
pub use user::UserRoutes;

use url::Url;

pub(crate) fn with_window(mut url: Url, index: Option<u32>, limit: Option<u32>) -> Url {
    {
        let mut pairs = url.query_pairs_mut();
        if let Some(index) = index {
            pairs.append_pair("index", &index.to_string());
        }
        if let Some(limit) = limit {
            pairs.append_pair("limit", &limit.to_string());
        }
    }
    url
}
