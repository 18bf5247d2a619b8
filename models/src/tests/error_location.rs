use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` correctly captures file, line, and column.
///
/// **WHY THIS MATTERS**: ErrorLocation is the foundation of the error reporting in the
/// client crate. If it fails to capture accurate location data, every classified error
/// loses its debugging value.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - `Location::caller()` stops being propagated correctly
/// - File path extraction breaks
/// - Line/column capture fails
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: Current caller location
    // WHEN: Creating ErrorLocation from caller
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, 18, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies that ErrorLocation Display output keeps the `[file:line:column]` shape.
///
/// **BUG THIS CATCHES**: Would catch a Display change that drops the brackets or one of
/// the three components, which every error variant's message embeds verbatim.
#[test]
fn given_error_location_when_formatted_then_uses_bracketed_triple() {
    // GIVEN: A known location
    let location = ErrorLocation {
        file: "validation/mod.rs",
        line: 42,
        column: 7,
    };

    // WHEN: Formatting it
    let rendered = format!("{location}");

    // THEN: Bracketed file:line:column
    assert_eq!(rendered, "[validation/mod.rs:42:7]");
}
