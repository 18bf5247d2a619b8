use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::routes::with_window;

use deezer_models::{Album, Artist, Chart, PaginatedResponse, Playlist, Podcast, Track};

/// All endpoints related to [`Chart`]. Chart ids are genre ids; 0 is the
/// whole catalog.
pub struct ChartRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn charts(&self) -> ChartRoutes<'_> {
        ChartRoutes { client: self }
    }
}

impl ChartRoutes<'_> {
    /// Retrieve the charts of the whole catalog.
    pub async fn get_all(
        &self,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Chart, DeezerClientError> {
        let url = with_window(self.client.endpoint("chart")?, index, limit);
        self.client.get_json(url).await
    }

    /// Retrieve the charts of one genre.
    pub async fn get_by_id(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Chart, DeezerClientError> {
        let url = with_window(self.client.endpoint(&format!("chart/{id}"))?, index, limit);
        self.client.get_json(url).await
    }

    pub async fn get_tracks(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("chart/{id}/tracks"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    pub async fn get_albums(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Album>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("chart/{id}/albums"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    pub async fn get_artists(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Artist>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("chart/{id}/artists"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    pub async fn get_playlists(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Playlist>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("chart/{id}/playlists"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    pub async fn get_podcasts(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Podcast>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("chart/{id}/podcasts"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }
}
