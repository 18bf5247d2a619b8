use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;

use deezer_models::{
    Album, Artist, ErrorLocation, PaginatedResponse, Playlist, Podcast, Radio, SearchOrder, Track,
    User,
};

use std::panic::Location;

use serde::de::DeserializeOwned;
use url::Url;

/// All endpoints related to search.
///
/// `strict` disables the API's fuzzy mode (`strict=on` on the wire). Use
/// [`AdvancedQueryBuilder`] for field-scoped queries.
pub struct SearchRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn searches(&self) -> SearchRoutes<'_> {
        SearchRoutes { client: self }
    }
}

impl SearchRoutes<'_> {
    /// Basic search; returns [`Track`]s with a reduced field set.
    pub async fn search(
        &self,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        self.search_in("search", q, strict, order, index, limit).await
    }

    pub async fn search_album(
        &self,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Album>, DeezerClientError> {
        self.search_in("search/album", q, strict, order, index, limit)
            .await
    }

    pub async fn search_artist(
        &self,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Artist>, DeezerClientError> {
        self.search_in("search/artist", q, strict, order, index, limit)
            .await
    }

    pub async fn search_playlist(
        &self,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Playlist>, DeezerClientError> {
        self.search_in("search/playlist", q, strict, order, index, limit)
            .await
    }

    pub async fn search_podcast(
        &self,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Podcast>, DeezerClientError> {
        self.search_in("search/podcast", q, strict, order, index, limit)
            .await
    }

    pub async fn search_radio(
        &self,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Radio>, DeezerClientError> {
        self.search_in("search/radio", q, strict, order, index, limit)
            .await
    }

    pub async fn search_track(
        &self,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        self.search_in("search/track", q, strict, order, index, limit)
            .await
    }

    pub async fn search_user(
        &self,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<User>, DeezerClientError> {
        self.search_in("search/user", q, strict, order, index, limit)
            .await
    }

    async fn search_in<T: DeserializeOwned>(
        &self,
        path: &str,
        q: &str,
        strict: bool,
        order: Option<SearchOrder>,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<T>, DeezerClientError> {
        let mut url: Url = self.client.endpoint(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("q", q);
            if strict {
                pairs.append_pair("strict", "on");
            }
            if let Some(order) = order {
                pairs.append_pair("order", order.as_str());
            }
            if let Some(index) = index {
                pairs.append_pair("index", &index.to_string());
            }
            if let Some(limit) = limit {
                pairs.append_pair("limit", &limit.to_string());
            }
        }
        self.client.get_json(url).await
    }
}

/// Builder for the API's advanced search syntax
/// (`artist:"aloe blacc" dur_min:300 ...`).
///
/// Blank criteria are skipped, like absent ones.
#[derive(Debug, Clone, Default)]
pub struct AdvancedQueryBuilder {
    q: Option<String>,
    artist: Option<String>,
    album: Option<String>,
    track: Option<String>,
    label: Option<String>,
    duration_min: Option<u32>,
    duration_max: Option<u32>,
    bpm_min: Option<u32>,
    bpm_max: Option<u32>,
}

impl AdvancedQueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn q(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub fn artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    pub fn album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    pub fn track(mut self, track: impl Into<String>) -> Self {
        self.track = Some(track.into());
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Minimum track duration in seconds.
    pub fn duration_min(mut self, seconds: u32) -> Self {
        self.duration_min = Some(seconds);
        self
    }

    /// Maximum track duration in seconds.
    pub fn duration_max(mut self, seconds: u32) -> Self {
        self.duration_max = Some(seconds);
        self
    }

    pub fn bpm_min(mut self, bpm: u32) -> Self {
        self.bpm_min = Some(bpm);
        self
    }

    pub fn bpm_max(mut self, bpm: u32) -> Self {
        self.bpm_max = Some(bpm);
        self
    }

    /// Renders the query string for the search endpoints.
    ///
    /// Fails with an argument error when no criterion was provided, or when
    /// every provided criterion was blank.
    #[track_caller]
    pub fn build(&self) -> Result<String, DeezerClientError> {
        let location = ErrorLocation::from(Location::caller());
        if self.q.is_none()
            && self.artist.is_none()
            && self.album.is_none()
            && self.track.is_none()
            && self.label.is_none()
            && self.duration_min.is_none()
            && self.duration_max.is_none()
            && self.bpm_min.is_none()
            && self.bpm_max.is_none()
        {
            return Err(DeezerClientError::InvalidArgument {
                message: "requires at least 1 parameter to search".to_string(),
                location,
            });
        }

        let mut query = String::new();
        if let Some(q) = usable(&self.q) {
            query.push_str(&format!("\"{q}\""));
        }
        if let Some(artist) = usable(&self.artist) {
            query.push_str(&format!(" artist:\"{artist}\""));
        }
        if let Some(album) = usable(&self.album) {
            query.push_str(&format!(" album:\"{album}\""));
        }
        if let Some(track) = usable(&self.track) {
            query.push_str(&format!(" track:\"{track}\""));
        }
        if let Some(label) = usable(&self.label) {
            query.push_str(&format!(" label:\"{label}\""));
        }
        if let Some(seconds) = self.duration_min {
            query.push_str(&format!(" dur_min:{seconds}"));
        }
        if let Some(seconds) = self.duration_max {
            query.push_str(&format!(" dur_max:{seconds}"));
        }
        if let Some(bpm) = self.bpm_min {
            query.push_str(&format!(" bpm_min:{bpm}"));
        }
        if let Some(bpm) = self.bpm_max {
            query.push_str(&format!(" bpm_max:{bpm}"));
        }

        let query = query.trim().to_string();
        if query.is_empty() {
            return Err(DeezerClientError::InvalidArgument {
                message: "query cannot be blank".to_string(),
                location,
            });
        }
        Ok(query)
    }
}

fn usable(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
