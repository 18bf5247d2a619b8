use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::routes::with_window;

use deezer_models::{Episode, PaginatedResponse, Podcast};

/// All endpoints related to [`Podcast`].
pub struct PodcastRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn podcasts(&self) -> PodcastRoutes<'_> {
        PodcastRoutes { client: self }
    }
}

impl PodcastRoutes<'_> {
    pub async fn get_all(
        &self,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Podcast>, DeezerClientError> {
        let url = with_window(self.client.endpoint("podcast")?, index, limit);
        self.client.get_json(url).await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Podcast, DeezerClientError> {
        let url = self.client.endpoint(&format!("podcast/{id}"))?;
        self.client.get_json(url).await
    }

    pub async fn get_episodes(
        &self,
        id: i64,
        index: Option<u32>,
        limit: Option<u32>,
    ) -> Result<PaginatedResponse<Episode>, DeezerClientError> {
        let url = with_window(
            self.client.endpoint(&format!("podcast/{id}/episodes"))?,
            index,
            limit,
        );
        self.client.get_json(url).await
    }
}
