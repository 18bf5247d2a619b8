use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;

use deezer_models::Episode;

/// All endpoints related to [`Episode`].
pub struct EpisodeRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn episodes(&self) -> EpisodeRoutes<'_> {
        EpisodeRoutes { client: self }
    }
}

impl EpisodeRoutes<'_> {
    /// Retrieve an [`Episode`] by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Episode, DeezerClientError> {
        let url = self.client.endpoint(&format!("episode/{id}"))?;
        self.client.get_json(url).await
    }
}
