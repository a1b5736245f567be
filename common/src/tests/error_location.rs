use crate::ErrorLocation;
use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` correctly captures file, line, and column.
///
/// **WHY THIS MATTERS**: ErrorLocation is the foundation of the entire error tracking system.
/// If it fails to capture accurate location data, ALL error messages throughout the codebase
/// lose their debugging value.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - `Location::caller()` stops being propagated correctly
/// - File path extraction breaks
/// - Line/column capture fails
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN: Current caller location
    // WHEN: Creating ErrorLocation from caller
    let expected_line = line!() + 1;
    let location = ErrorLocation::from(Location::caller());

    // THEN: Should capture file, line, and column
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(
        location.line, expected_line,
        "Should capture correct line number"
    );
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies that ErrorLocation Display formatting produces the expected format.
///
/// **WHY THIS MATTERS**: Every error message in the workspace embeds a location through
/// this Display impl. If the format breaks, error messages become unreadable or lose
/// critical location information.
///
/// **BUG THIS CATCHES**: Would catch if:
/// - Display implementation changes format (e.g., removes brackets)
/// - File path, line, or column are missing from output
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting as string
    let formatted = format!("{}", location);

    // THEN: Should produce "[file:line:column]" format
    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(
        formatted.contains("error_location.rs"),
        "Should include filename"
    );
    assert!(
        formatted.contains(&location.line.to_string()),
        "Should include line number"
    );
    assert!(
        formatted.contains(&location.column.to_string()),
        "Should include column number"
    );
}

/// **VALUE**: Verifies that `#[track_caller]` propagates through helper functions.
///
/// **WHY THIS MATTERS**: All error constructors in the client crate are
/// `#[track_caller]` helpers. If propagation breaks, every error reports the
/// constructor's location instead of the actual error site.
///
/// **BUG THIS CATCHES**: Would catch a removed or ineffective `#[track_caller]`
/// attribute on an intermediate function.
#[test]
fn given_track_caller_helper_when_called_then_reports_call_site() {
    #[track_caller]
    fn capture() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // GIVEN/WHEN: Capturing through a #[track_caller] helper
    let expected_line = line!() + 1;
    let location = capture();

    // THEN: Location should point at the call site, not inside capture()
    assert_eq!(
        location.line, expected_line,
        "Should report the caller's line"
    );
    assert!(
        location.file.contains("error_location.rs"),
        "Should report the caller's file"
    );
}
