use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::routes::with_window;

use deezer_models::{PaginatedResponse, Playlist, Track, User};

/// All endpoints related to [`Playlist`].
pub struct PlaylistRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn playlists(&self) -> PlaylistRoutes<'_> {
        PlaylistRoutes { client: self }
    }
}

impl PlaylistRoutes<'_> {
    pub async fn get_by_id(&self, id: i64) -> Result<Playlist, DeezerClientError> {
        let url = self.client.endpoint(&format!("playlist/{id}"))?;
        self.client.get_json(url).await
    }

    pub async fn get_fans(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<User>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("playlist/{id}/fans"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    pub async fn get_tracks(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("playlist/{id}/tracks"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve the radio [`Track`]s seeded by a [`Playlist`].
    pub async fn get_radio(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("playlist/{id}/radio"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }
}
