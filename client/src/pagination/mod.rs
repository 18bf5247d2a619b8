//! Cursor traversal over [`PaginatedResponse`] continuation links.
//!
//! The API hands out opaque absolute URLs in `prev`/`next`; traversal follows
//! them verbatim. A missing or blank link is a terminal condition, not an
//! error, and costs no network call.

use crate::client::DeezerApiClient;
use crate::error::DeezerClientError;
use crate::registry::GlobalApiClient;

use deezer_models::PaginatedResponse;

use serde::de::DeserializeOwned;
use url::Url;

/// Fetch-next / fetch-previous over one page.
///
/// With `expand`, the element windows of the original and the fetched page
/// are concatenated; both windows are `Vec<T>` of the same `T`, so mixing
/// element types across a continuation is rejected by the signature rather
/// than at runtime. Every other field (`checksum`, `total`, `prev`, `next`)
/// always comes from the freshly fetched page.
#[allow(async_fn_in_trait)]
pub trait PageCursor<T> {
    /// Follows `next`, or returns `None` without a request when there is no
    /// usable link.
    ///
    /// With `expand`, the returned `data` is the original window followed by
    /// the fetched one. Expanding an empty original degrades to the fetched
    /// page unchanged.
    async fn fetch_next(
        &self,
        client: &DeezerApiClient,
        expand: bool,
    ) -> Result<Option<PaginatedResponse<T>>, DeezerClientError>;

    /// Follows `prev`; the symmetric prepend of [`fetch_next`](Self::fetch_next).
    async fn fetch_previous(
        &self,
        client: &DeezerApiClient,
        expand: bool,
    ) -> Result<Option<PaginatedResponse<T>>, DeezerClientError>;

    /// [`fetch_next`](Self::fetch_next) resolving the client through the
    /// global registry.
    #[deprecated(note = "pass a client explicitly with `fetch_next`")]
    async fn fetch_next_global(
        &self,
        expand: bool,
    ) -> Result<Option<PaginatedResponse<T>>, DeezerClientError> {
        let client = GlobalApiClient::require_instance()?;
        self.fetch_next(&client, expand).await
    }

    /// [`fetch_previous`](Self::fetch_previous) resolving the client through
    /// the global registry.
    #[deprecated(note = "pass a client explicitly with `fetch_previous`")]
    async fn fetch_previous_global(
        &self,
        expand: bool,
    ) -> Result<Option<PaginatedResponse<T>>, DeezerClientError> {
        let client = GlobalApiClient::require_instance()?;
        self.fetch_previous(&client, expand).await
    }
}

impl<T> PageCursor<T> for PaginatedResponse<T>
where
    T: DeserializeOwned + Clone,
{
    async fn fetch_next(
        &self,
        client: &DeezerApiClient,
        expand: bool,
    ) -> Result<Option<PaginatedResponse<T>>, DeezerClientError> {
        let Some(link) = usable_link(self.next.as_deref()) else {
            return Ok(None);
        };
        let url = Url::parse(link)?;
        let mut fetched: PaginatedResponse<T> = client.get_json(url).await?;
        if expand && !self.data.is_empty() {
            let mut data = self.data.clone();
            data.append(&mut fetched.data);
            fetched.data = data;
        }
        Ok(Some(fetched))
    }

    async fn fetch_previous(
        &self,
        client: &DeezerApiClient,
        expand: bool,
    ) -> Result<Option<PaginatedResponse<T>>, DeezerClientError> {
        let Some(link) = usable_link(self.prev.as_deref()) else {
            return Ok(None);
        };
        let url = Url::parse(link)?;
        let mut fetched: PaginatedResponse<T> = client.get_json(url).await?;
        if expand && !self.data.is_empty() {
            fetched.data.extend(self.data.iter().cloned());
        }
        Ok(Some(fetched))
    }
}

fn usable_link(link: Option<&str>) -> Option<&str> {
    link.filter(|value| !value.trim().is_empty())
}
