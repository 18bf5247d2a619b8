use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;

use deezer_models::Track;

/// All endpoints related to [`Track`].
pub struct TrackRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn tracks(&self) -> TrackRoutes<'_> {
        TrackRoutes { client: self }
    }
}

impl TrackRoutes<'_> {
    /// Retrieve a [`Track`] by id.
    pub async fn get_by_id(&self, id: i64) -> Result<Track, DeezerClientError> {
        let url = self.client.endpoint(&format!("track/{id}"))?;
        self.client.get_json(url).await
    }

    /// Retrieve a [`Track`] by ISRC (International Standard Recording Code).
    pub async fn get_by_isrc(&self, isrc: &str) -> Result<Track, DeezerClientError> {
        let url = self.client.endpoint(&format!("track/isrc:{isrc}"))?;
        self.client.get_json(url).await
    }
}
