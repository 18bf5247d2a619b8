use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;

use deezer_models::User;

/// All endpoints related to [`User`].
pub struct UserRoutes<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn users(&self) -> UserRoutes<'_> {
        UserRoutes { client: self }
    }
}

impl UserRoutes<'_> {
    /// Retrieve a [`User`] by id.
    pub async fn get_by_id(&self, id: i64) -> Result<User, DeezerClientError> {
        let url = self.client.endpoint(&format!("user/{id}"))?;
        self.client.get_json(url).await
    }
}
