use crate::{PaginatedResponse, Track};

/// **VALUE**: Verifies the pagination envelope decodes with every optional field absent.
///
/// **WHY THIS MATTERS**: Several endpoints return `{"data":[...]}` with no total and no
/// continuation links. The cursor subsystem treats missing links as terminal, so the
/// envelope must not require them.
#[test]
fn given_minimal_envelope_when_deserialized_then_optionals_are_none() {
    // GIVEN: An envelope with only data
    let json = r#"{"data":[]}"#;

    // WHEN: Deserializing
    let page: PaginatedResponse<Track> = serde_json::from_str(json).expect("minimal envelope");

    // THEN: Everything optional is absent
    assert!(page.data.is_empty());
    assert!(page.checksum.is_none());
    assert!(page.total.is_none());
    assert!(page.prev.is_none());
    assert!(page.next.is_none());
}

/// **VALUE**: Verifies blank continuation links count as terminal.
///
/// **BUG THIS CATCHES**: Would catch `has_next` looking only at `Option::is_some`,
/// which would send the cursor chasing an empty-string URL.
#[test]
fn given_blank_next_link_when_has_next_then_false() {
    let page = PaginatedResponse::<Track> {
        next: Some("   ".to_string()),
        ..Default::default()
    };
    assert!(!page.has_next());
    assert!(!page.has_previous());

    let page = PaginatedResponse::<Track> {
        next: Some("https://api.deezer.com/search?q=x&index=25".to_string()),
        ..Default::default()
    };
    assert!(page.has_next());
}

/// **VALUE**: Verifies `checksum`/`total` pass through untouched.
#[test]
fn given_full_envelope_when_deserialized_then_fields_pass_through() {
    let json = r#"{
        "data": [],
        "checksum": "a7f3",
        "total": 193,
        "prev": "https://api.deezer.com/search?q=x&index=0",
        "next": "https://api.deezer.com/search?q=x&index=50"
    }"#;

    let page: PaginatedResponse<Track> = serde_json::from_str(json).expect("full envelope");

    assert_eq!(page.checksum.as_deref(), Some("a7f3"));
    assert_eq!(page.total, Some(193));
    assert!(page.has_previous());
    assert!(page.has_next());
}
