use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::routes::with_window;

use deezer_models::{Genre, PaginatedResponse, Radio, Track};

/// All endpoints related to [`Radio`].
pub struct RadioRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn radios(&self) -> RadioRoutes<'_> {
        RadioRoutes { client: self }
    }
}

impl RadioRoutes<'_> {
    pub async fn get_all(
        &self,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Radio>, DeezerClientError> {
        let url = with_window(self.client.endpoint("radio")?, index, limit);
        self.client.get_json(url).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Radio, DeezerClientError> {
        let url = self.client.endpoint(&format!("radio/{id}"))?;
        self.client.get_json(url).await
    }

    /// Retrieve all radios split by [`Genre`].
    pub async fn get_genres(
        &self,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Genre>, DeezerClientError> {
        let url = with_window(self.client.endpoint("radio/genres")?, index, limit);
        self.client.get_json(url).await
    }

    pub async fn get_top(
        &self,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Radio>, DeezerClientError> {
        let url = with_window(self.client.endpoint("radio/top")?, index, limit);
        self.client.get_json(url).await
    }

    /// Retrieve the first 40 [`Track`]s of a [`Radio`].
    pub async fn get_tracks(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Track>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("radio/{id}/tracks"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }

    /// Retrieve the personal radio lists of the current user.
    pub async fn get_lists(
        &self,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Radio>, DeezerClientError> {
        let url = with_window(self.client.endpoint("radio/lists")?, index, limit);
        self.client.get_json(url).await
    }
}
