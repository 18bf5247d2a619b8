use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::routes::with_window;

use deezer_models::{Album, PaginatedResponse, Track, User};

/// All endpoints related to [`Album`].
pub struct AlbumRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn albums(&self) -> AlbumRoutes<'_> {
        AlbumRoutes { client: self }
    }
}

impl AlbumRoutes<'_> {
    /// Retrieve an [`Album`] by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Album, DeezerClientError> {
        let url = self.client.endpoint(&format!("album/{id}"))?;
        self.client.get_json(url).await
    }

    /// Retrieve an [`Album`] by UPC (Universal Product Code).
    pub async fn get_by_upc(&self, upc: &str) -> Result<Album, DeezerClientError> {
        let url = self.client.endpoint(&format!("album/upc:{upc}"))?;
        self.client.get_json(url).await
    }

    /// Retrieve the fans of an [`Album`].
    pub async fn get_fans(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<User>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("album/{id}/fans"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve all [`Track`]s of an [`Album`].
    pub async fn get_tracks(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("album/{id}/tracks"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }
}
