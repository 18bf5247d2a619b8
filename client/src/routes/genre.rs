use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::routes::with_window;

use deezer_models::{Artist, Genre, PaginatedResponse, Podcast, Radio};

/// All endpoints related to [`Genre`].
pub struct GenreRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn genres(&self) -> GenreRoutes<'_> {
        GenreRoutes { client: self }
    }
}

impl GenreRoutes<'_> {
    pub async fn get_all(
        &self,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Genre>, DeezerClientError> {
        let url = with_window(self.client.endpoint("genre")?, index, limit);
        self.client.get_json(url).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Genre, DeezerClientError> {
        let url = self.client.endpoint(&format!("genre/{id}"))?;
        self.client.get_json(url).await
    }

    pub async fn get_artists(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Artist>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("genre/{id}/artists"))?,
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
            self.client.endpoint(&format!("genre/{id}/podcasts"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    pub async fn get_radios(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Radio>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("genre/{id}/radios"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }
}
