use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::routes::with_window;

use deezer_models::{Album, Artist, PaginatedResponse, Playlist, Track, User};

/// All endpoints related to [`Artist`].
pub struct ArtistRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn artists(&self) -> ArtistRoutes<'_> {
        ArtistRoutes { client: self }
    }
}

impl ArtistRoutes<'_> {
    /// Retrieve an [`Artist`] by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Artist, DeezerClientError> {
        let url = self.client.endpoint(&format!("artist/{id}"))?;
        self.client.get_json(url).await
    }

    /// Retrieve all [`User`] fans of an [`Artist`].
    pub async fn get_fans(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<User>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("artist/{id}/fans"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve the top [`Track`]s of an [`Artist`].
    pub async fn get_top_tracks(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("artist/{id}/top"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve all [`Album`]s of an [`Artist`].
    pub async fn get_albums(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Album>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("artist/{id}/albums"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve the smart-radio [`Track`]s of an [`Artist`].
    pub async fn get_radio(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("artist/{id}/radio"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve all [`Playlist`]s featuring an [`Artist`].
    pub async fn get_playlists(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Playlist>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("artist/{id}/playlists"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve [`Artist`]s related to a specific [`Artist`].
    pub async fn get_related(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Artist>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("artist/{id}/related"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }
}
