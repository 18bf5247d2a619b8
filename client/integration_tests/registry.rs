use crate::helpers::{TRACK_123, json_body};

use deezer_client::{DeezerApiClient, DeezerClientError, GlobalApiClient, PageCursor, Resource};
use deezer_models::{PaginatedResponse, Track};

use serial_test::serial;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer};

/// **VALUE**: Verifies the deprecated global fallbacks actually reach the
/// registered client, end to end.
///
/// **WHY THIS MATTERS**: The `*_global` entry points are kept for backward
/// compatibility; they must keep resolving through the registry until removed.
#[tokio::test]
#[serial]
#[allow(deprecated)]
async fn given_registered_client_when_global_reload_and_fetch_then_registry_resolves() {
    GlobalApiClient::reset();

    // GIVEN: A stub and a freshly constructed (hence registered) client
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/track/123"))
        .respond_with(json_body(TRACK_123))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/next"))
        .respond_with(json_body(r#"{"data": [{"id": 7, "title": "x"}]}"#))
        .mount(&server)
        .await;
    let _client = DeezerApiClient::with_base_url(&server.uri()).expect("client");

    // WHEN: Reloading and paginating through the global fallback
    let stale = Track {
        id: 123,
        ..Default::default()
    };
    let fresh = stale.reload_global().await.expect("global reload");

    let page = PaginatedResponse::<Track> {
        next: Some(format!("{}/page/next", server.uri())),
        ..Default::default()
    };
    let fetched = page
        .fetch_next_global(false)
        .await
        .expect("global continuation")
        .expect("page");

    // THEN: Both resolved the registered client
    assert_eq!(fresh.title, "Aerodynamic");
    assert_eq!(fetched.data.len(), 1);

    GlobalApiClient::reset();
}

/// **VALUE**: Verifies the global fallbacks fail with the configuration error when
/// the registry is empty, instead of panicking or hanging.
#[tokio::test]
#[serial]
#[allow(deprecated)]
async fn given_empty_registry_when_global_reload_then_configuration_error() {
    GlobalApiClient::reset();

    let stale = Track {
        id: 123,
        ..Default::default()
    };

    let result = stale.reload_global().await;

    assert!(matches!(
        result,
        Err(DeezerClientError::Configuration { .. })
    ));
}
