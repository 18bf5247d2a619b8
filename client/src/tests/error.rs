use crate::error::{DeezerApiError, DeezerClientError, ErrorCode};

use std::error::Error;

/// **VALUE**: Verifies every documented code resolves to its catalog entry and
/// unknown codes stay unresolved.
///
/// **BUG THIS CATCHES**: Would catch a catalog entry with a mistyped numeric code,
/// which would silently render as "Unknown".
#[test]
fn given_documented_codes_when_resolved_then_catalog_entries_match() {
    assert_eq!(ErrorCode::from_code(4), Some(ErrorCode::Quota));
    assert_eq!(ErrorCode::from_code(100), Some(ErrorCode::ItemsLimitExceeded));
    assert_eq!(ErrorCode::from_code(200), Some(ErrorCode::Permission));
    assert_eq!(ErrorCode::from_code(300), Some(ErrorCode::TokenInvalid));
    assert_eq!(ErrorCode::from_code(500), Some(ErrorCode::Parameter));
    assert_eq!(ErrorCode::from_code(501), Some(ErrorCode::ParameterMissing));
    assert_eq!(ErrorCode::from_code(600), Some(ErrorCode::QueryInvalid));
    assert_eq!(ErrorCode::from_code(700), Some(ErrorCode::ServiceBusy));
    assert_eq!(ErrorCode::from_code(800), Some(ErrorCode::DataNotFound));
    assert_eq!(
        ErrorCode::from_code(901),
        Some(ErrorCode::IndividualAccountNotAllowed)
    );

    assert_eq!(ErrorCode::from_code(0), None);
    assert_eq!(ErrorCode::from_code(37), None);
}

/// **VALUE**: Verifies the rendered message carries the tag, the resolved
/// description with code and type, the free-text detail, and the documentation
/// pointer.
#[test]
fn given_resolvable_code_when_rendered_then_message_has_all_parts() {
    // GIVEN: An API error with a documented code and a detail
    let error = DeezerApiError::new(Some(800), Some("track 0 does not exist".to_string()));

    // WHEN: Rendering
    let rendered = error.to_string();

    // THEN: Tag, catalog entry, detail and docs pointer all present
    assert!(rendered.starts_with("[Deezer API Error]"));
    assert!(rendered.contains("Data not found (code 800, type DataException)"));
    assert!(rendered.contains("track 0 does not exist"));
    assert!(rendered.contains("https://developers.deezer.com/api/errors"));
}

/// **VALUE**: Verifies unresolved codes keep the raw number instead of being
/// dropped.
#[test]
fn given_unknown_code_when_rendered_then_raw_number_kept() {
    let error = DeezerApiError::new(Some(37), None);
    let rendered = error.to_string();

    assert!(rendered.contains("Unknown (code 37)"));
    assert!(error.error_code().is_none());
}

/// **VALUE**: Verifies the cause chain survives wrapping.
///
/// **WHY THIS MATTERS**: The classification pipeline wraps probe failures and
/// transport failures; losing the cause would make every classified error opaque.
#[test]
fn given_wrapped_source_when_chained_then_cause_is_reachable() {
    // GIVEN: An API error wrapping a decode failure
    let probe = serde_json::from_slice::<bool>(b"{").unwrap_err();
    let error = DeezerApiError::new(Some(600), None).with_source(probe);

    // THEN: The source is reachable through the standard chain
    assert!(error.source().is_some());

    let client_error: DeezerClientError = error.into();
    assert!(client_error.source().is_some());
}

/// **VALUE**: Verifies the `From` conversions classify and keep location context.
#[test]
fn given_invalid_url_when_converted_then_url_parse_variant_with_location() {
    let parse_error = url::Url::parse("not a url").unwrap_err();
    let error: DeezerClientError = parse_error.into();

    match &error {
        DeezerClientError::UrlParse { location, .. } => {
            assert!(location.file.contains("error.rs"));
        }
        other => panic!("expected UrlParse, got {other:?}"),
    }
    assert!(error.to_string().contains("URL Parse Error"));
}

/// **VALUE**: Verifies decode failures convert to the Decode classification, which
/// stays disjoint from the validator's own kinds.
#[test]
fn given_serde_error_when_converted_then_decode_variant() {
    let decode_error = serde_json::from_slice::<bool>(b"{").unwrap_err();
    let error: DeezerClientError = decode_error.into();

    assert!(matches!(error, DeezerClientError::Decode { .. }));
    assert!(error.source().is_some());
}
