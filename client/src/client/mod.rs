use crate::API_DEEZER_URL;
use crate::error::DeezerClientError;
use crate::registry::GlobalApiClient;
use crate::validation;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);

/// Client for the official [Deezer API](https://developers.deezer.com/api/).
///
/// Cloning is cheap; clones share the underlying connection pool and the
/// active flag. Every constructor registers the new client as the global
/// fallback if the slot is free (see [`GlobalApiClient`]).
#[derive(Debug, Clone)]
pub struct DeezerApiClient {
    base_url: Url,
    http: Client,
    active: Arc<AtomicBool>,
}

impl DeezerApiClient {
    /// Builds a client against `https://api.deezer.com` with the default
    /// transport (30 s request timeout, JSON accept header).
    pub fn new() -> Result<Self, DeezerClientError> {
        Self::with_base_url(API_DEEZER_URL)
    }

    /// Builds a client with the default transport against another base URL.
    ///
    /// Meant for mirrors and test servers.
    pub fn with_base_url(base_url: &str) -> Result<Self, DeezerClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let http = Client::builder()
            .timeout(DEFAULT_TIMEOUT_DURATION)
            .default_headers(headers)
            .build()?;
        Self::from_http_client(http, base_url)
    }

    /// Wraps a caller-configured [`reqwest::Client`].
    ///
    /// Timeouts and any other transport policy stay with the given client;
    /// this type adds no timer management of its own.
    pub fn from_http_client(http: Client, base_url: &str) -> Result<Self, DeezerClientError> {
        let base_url = Url::parse(base_url)?;
        let client = Self {
            base_url,
            http,
            active: Arc::new(AtomicBool::new(true)),
        };
        GlobalApiClient::init_if_needed(&client);
        Ok(client)
    }

    /// Whether this client has not been [closed](Self::close).
    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::Acquire)
    }

    /// Marks the client inactive.
    ///
    /// Cooperative: in-flight requests finish, and the global registry will
    /// hand the slot to the next constructed client.
    pub fn close(&self) {
        self.active.store(false, Ordering::Release);
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, DeezerClientError> {
        Ok(self.base_url.join(path)?)
    }

    /// Issues one GET and funnels the response through validation before
    /// typed decoding.
    ///
    /// The body is read from the transport exactly once, into one buffer;
    /// both the validation probes and the final decode work from that
    /// buffer.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
    ) -> Result<T, DeezerClientError> {
        debug!("GET {url}");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let body = response.bytes().await?;
        validation::validate(status, content_type.as_deref(), &body)?;
        Ok(serde_json::from_slice(&body)?)
    }
}
