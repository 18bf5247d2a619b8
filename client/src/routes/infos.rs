use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;

use deezer_models::Infos;

/// The `infos` endpoint.
pub struct InfosRoute<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn infos(&self) -> InfosRoute<'_> {
        InfosRoute { client: self }
    }
}

impl InfosRoute<'_> {
    /// Retrieve the API information for the current country.
    pub async fn get_infos(&self) -> Result<Infos, DeezerClientError> {
        let url = self.client.endpoint("infos")?;
        self.client.get_json(url).await
    }
}
