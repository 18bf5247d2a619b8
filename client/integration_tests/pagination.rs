use crate::helpers::json_body;

use deezer_client::{DeezerApiClient, PageCursor};
use deezer_models::{PaginatedResponse, Track};

use serial_test::serial;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer};

async fn client_for(server: &MockServer) -> DeezerApiClient {
    DeezerApiClient::with_base_url(&server.uri()).expect("client")
}

fn track(id: i64, title: &str) -> Track {
    Track {
        id,
        title: title.to_string(),
        ..Default::default()
    }
}

/// **VALUE**: Verifies the continuation scenario: an empty window whose `next`
/// points at `search?q=x&index=25` yields the freshly fetched page with its own
/// `total` and `next`.
///
/// **WHY THIS MATTERS**: The continuation link is followed verbatim, query string
/// included; the fetched page's bookkeeping fields must win over the original's.
#[tokio::test]
#[serial]
async fn given_next_link_when_fetch_next_then_fetched_page_returned() {
    // GIVEN: A stub serving the second search window
    let server = MockServer::start().await;
    let next_link = format!("{}/search?q=x&index=25", server.uri());
    let follow_up = format!("{}/search?q=x&index=50", server.uri());
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "x"))
        .and(query_param("index", "25"))
        .respond_with(json_body(&format!(
            r#"{{
                "data": [{{"id": 7, "title": "One More Time"}}],
                "total": 193,
                "next": "{follow_up}"
            }}"#
        )))
        .expect(1)
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let page = PaginatedResponse::<Track> {
        next: Some(next_link),
        ..Default::default()
    };

    // WHEN: Following the continuation
    let fetched = page
        .fetch_next(&client, false)
        .await
        .expect("continuation")
        .expect("page");

    // THEN: The fetched page's fields, not the original's
    assert_eq!(fetched.total, Some(193));
    assert_eq!(fetched.data.len(), 1);
    assert!(fetched.next.as_deref().unwrap().ends_with("index=50"));
}

/// **VALUE**: Verifies `expand` concatenates original-then-fetched for next, and
/// fetched-then-original for previous, with bookkeeping from the fetched page.
#[tokio::test]
#[serial]
async fn given_expand_when_fetch_next_and_previous_then_windows_concatenate_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page/next"))
        .respond_with(json_body(
            r#"{"data": [{"id": 3, "title": "c"}, {"id": 4, "title": "d"}], "total": 4}"#,
        ))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/page/prev"))
        .respond_with(json_body(
            r#"{"data": [{"id": 1, "title": "a"}], "total": 4}"#,
        ))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let page = PaginatedResponse::<Track> {
        data: vec![track(2, "b")],
        total: Some(999),
        next: Some(format!("{}/page/next", server.uri())),
        prev: Some(format!("{}/page/prev", server.uri())),
        ..Default::default()
    };

    // WHEN: Expanding forward
    let expanded = page
        .fetch_next(&client, true)
        .await
        .expect("continuation")
        .expect("page");

    // THEN: Original window first, fetched appended, fetched total wins
    let ids: Vec<i64> = expanded.data.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2, 3, 4]);
    assert_eq!(expanded.total, Some(4));

    // WHEN: Expanding backward
    let expanded = page
        .fetch_previous(&client, true)
        .await
        .expect("continuation")
        .expect("page");

    // THEN: Fetched window first, original appended
    let ids: Vec<i64> = expanded.data.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1, 2]);
}

/// **VALUE**: Verifies `expand=false` returns the fetched page untouched even when
/// the original window is non-empty.
#[tokio::test]
#[serial]
async fn given_non_empty_window_when_fetch_next_without_expand_then_fetched_page_only() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page/next"))
        .respond_with(json_body(r#"{"data": [{"id": 9, "title": "z"}]}"#))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let page = PaginatedResponse::<Track> {
        data: vec![track(1, "a"), track(2, "b")],
        next: Some(format!("{}/page/next", server.uri())),
        ..Default::default()
    };

    let fetched = page
        .fetch_next(&client, false)
        .await
        .expect("continuation")
        .expect("page");

    let ids: Vec<i64> = fetched.data.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![9]);
}

/// **VALUE**: Verifies expanding an empty original degrades to the fetched page
/// instead of erroring.
#[tokio::test]
#[serial]
async fn given_empty_window_when_fetch_next_with_expand_then_fetched_page_unmodified() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page/next"))
        .respond_with(json_body(r#"{"data": [{"id": 5, "title": "e"}]}"#))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let page = PaginatedResponse::<Track> {
        next: Some(format!("{}/page/next", server.uri())),
        ..Default::default()
    };

    let fetched = page
        .fetch_next(&client, true)
        .await
        .expect("continuation")
        .expect("page");

    assert_eq!(fetched.data.len(), 1);
    assert_eq!(fetched.data[0].id, 5);
}

/// **VALUE**: Verifies the terminal condition makes zero requests, asserted on the
/// stub's request journal.
#[tokio::test]
#[serial]
async fn given_terminal_page_when_fetch_next_then_zero_requests_recorded() {
    // GIVEN: A stub with nothing mounted
    let server = MockServer::start().await;
    let client = client_for(&server).await;

    let page = PaginatedResponse::<Track>::default();

    // WHEN: Traversing in both directions
    assert!(page.fetch_next(&client, false).await.expect("terminal").is_none());
    assert!(page.fetch_previous(&client, true).await.expect("terminal").is_none());

    // THEN: The journal stays empty
    let requests = server.received_requests().await.expect("journal");
    assert!(requests.is_empty(), "terminal traversal must not hit the network");
}

/// **VALUE**: Verifies a failed continuation aborts the traversal with the
/// classified error; no partial result is fabricated.
#[tokio::test]
#[serial]
async fn given_failing_continuation_when_fetch_next_then_error_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page/next"))
        .respond_with(json_body(
            r#"{"error":{"type":"Exception","message":"busy","code":700}}"#,
        ))
        .mount(&server)
        .await;
    let client = client_for(&server).await;

    let page = PaginatedResponse::<Track> {
        data: vec![track(1, "a")],
        next: Some(format!("{}/page/next", server.uri())),
        ..Default::default()
    };

    let result = page.fetch_next(&client, true).await;

    assert!(matches!(
        result,
        Err(deezer_client::DeezerClientError::Api(_))
    ));
}
