//! Reloadable API resources.
//!
//! Entity data stays in plain `deezer-models` structs; the refresh behavior
//! lives here, keyed by type through `ENDPOINT`. Reload never mutates the
//! original instance and never merges partial with full data - callers
//! discard the stale value and use the returned one.

use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::registry::GlobalApiClient;

use deezer_models::{
    Album, Artist, Editorial, Episode, Genre, Playlist, Podcast, Radio, Track, User,
};

use serde::de::DeserializeOwned;

/// An API entity that can re-fetch its own authoritative state by id.
#[allow(async_fn_in_trait)]
pub trait Resource: DeserializeOwned + Sized {
    /// Path segment of the entity's get-by-id endpoint.
    const ENDPOINT: &'static str;

    fn id(&self) -> i64;

    /// Informational type tag as reported by the API.
    fn resource_type(&self) -> &str;

    /// Fetches a fresh, independent copy of this entity.
    ///
    /// Exactly one request against the entity's own endpoint.
    async fn reload(&self, client: &DeezerApiClient) -> Result<Self, DeezerClientError> {
        let url = client.endpoint(&format!("{}/{}", Self::ENDPOINT, self.id()))?;
        client.get_json(url).await
    }

    /// [`reload`](Self::reload) resolving the client through the global
    /// registry.
    #[deprecated(note = "pass a client explicitly with `reload`")]
    async fn reload_global(&self) -> Result<Self, DeezerClientError> {
        let client = GlobalApiClient::require_instance()?;
        self.reload(&client).await
    }
}

macro_rules! impl_resource {
    ($entity:ty, $endpoint:literal) => {
        impl Resource for $entity {
            const ENDPOINT: &'static str = $endpoint;

            fn id(&self) -> i64 {
                self.id
            }

            fn resource_type(&self) -> &str {
                &self.kind
            }
        }
    };
}

impl_resource!(Album, "album");
impl_resource!(Artist, "artist");
impl_resource!(Editorial, "editorial");
impl_resource!(Episode, "episode");
impl_resource!(Genre, "genre");
impl_resource!(Playlist, "playlist");
impl_resource!(Podcast, "podcast");
impl_resource!(Radio, "radio");
impl_resource!(Track, "track");
impl_resource!(User, "user");
