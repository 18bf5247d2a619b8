use crate::client::DeezerApiClient;
use crate::pagination::PageCursor;

use deezer_models::{PaginatedResponse, Track};

use serial_test::serial;

// Unroutable on purpose; these tests must terminate before any request.
fn offline_client() -> DeezerApiClient {
    DeezerApiClient::with_base_url("http://127.0.0.1:9").expect("client")
}

/// **VALUE**: Verifies a missing continuation link is terminal, costing no network
/// call.
///
/// **WHY THIS MATTERS**: Callers loop `while let Some(page) = page.fetch_next(...)`;
/// the terminal condition must be a clean `None`, not an error and not a request
/// against a made-up URL.
///
/// **BUG THIS CATCHES**: The client here points at an unroutable address, so any
/// attempted request would surface as an error instead of `Ok(None)`.
#[tokio::test]
#[serial]
async fn given_no_next_link_when_fetch_next_then_none_without_request() {
    // GIVEN: Pages with absent and blank links
    let client = offline_client();
    let no_link = PaginatedResponse::<Track>::default();
    let blank_link = PaginatedResponse::<Track> {
        next: Some("  ".to_string()),
        prev: Some(String::new()),
        ..Default::default()
    };

    // WHEN / THEN: Terminal on both, in both directions
    assert!(no_link.fetch_next(&client, false).await.expect("terminal").is_none());
    assert!(no_link.fetch_previous(&client, false).await.expect("terminal").is_none());
    assert!(blank_link.fetch_next(&client, true).await.expect("terminal").is_none());
    assert!(blank_link.fetch_previous(&client, true).await.expect("terminal").is_none());
}
