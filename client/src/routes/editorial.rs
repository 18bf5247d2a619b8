use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::routes::with_window;

use deezer_models::{Album, Chart, Editorial, PaginatedResponse};

/// All endpoints related to [`Editorial`].
pub struct EditorialRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn editorials(&self) -> EditorialRoutes<'_> {
        EditorialRoutes { client: self }
    }
}

impl EditorialRoutes<'_> {
    pub async fn get_all(
        &self,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Editorial>, DeezerClientError> {
        let url = with_window(self.client.endpoint("editorial")?, index, limit);
        self.client.get_json(url).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Editorial, DeezerClientError> {
        let url = self.client.endpoint(&format!("editorial/{id}"))?;
        self.client.get_json(url).await
    }

    /// Retrieve [`Album`]s selected every week by the Deezer team.
    pub async fn get_deezer_selection(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Album>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("editorial/{id}/selection"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    pub async fn get_charts(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<Chart, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("editorial/{id}/charts"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve the new [`Album`] releases per genre for the current country.
    pub async fn get_releases(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Album>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("editorial/{id}/releases"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }
}
