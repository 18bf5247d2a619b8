use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;

use deezer_models::Options;

/// The `options` endpoint.
pub struct OptionsRoute<'a> {
    client: &'a DeezerApiClient,
}

impl DeezerApiClient {
    pub fn options(&self) -> OptionsRoute<'_> {
        OptionsRoute { client: self }
    }
}

impl OptionsRoute<'_> {
    /// Retrieve the current user's [`Options`].
    pub async fn get_options(&self) -> Result<Options, DeezerClientError> {
        let url = self.client.endpoint("options")?;
        self.client.get_json(url).await
    }
}
