use crate::HttpStatusCode;

/// **VALUE**: Verifies status range categorization at the boundaries.
///
/// **WHY THIS MATTERS**: The pipeline's 2xx gate and the classifier's
/// network-error branch both dispatch on these ranges. An off-by-one here
/// silently misclassifies 199/300-style edge statuses.
///
/// **BUG THIS CATCHES**: Would catch inclusive/exclusive range mistakes in
/// `is_success`, `is_client_error`, and `is_server_error`.
#[test]
fn given_boundary_codes_when_categorized_then_ranges_are_half_open() {
    // 2xx
    assert!(!HttpStatusCode(199).is_success());
    assert!(HttpStatusCode(200).is_success());
    assert!(HttpStatusCode(299).is_success());
    assert!(!HttpStatusCode(300).is_success());

    // 4xx
    assert!(!HttpStatusCode(399).is_client_error());
    assert!(HttpStatusCode(400).is_client_error());
    assert!(HttpStatusCode(499).is_client_error());
    assert!(!HttpStatusCode(500).is_client_error());

    // 5xx
    assert!(HttpStatusCode(500).is_server_error());
    assert!(HttpStatusCode(599).is_server_error());
    assert!(!HttpStatusCode(600).is_server_error());
}

/// **VALUE**: Verifies Display renders the bare numeric code.
///
/// **WHY THIS MATTERS**: Classifier messages interpolate the status code into
/// user-facing text ("response status 500"). Any decoration here would leak
/// into notifications.
///
/// **BUG THIS CATCHES**: Would catch a Display impl drifting away from the
/// plain numeric form.
#[test]
fn given_status_code_when_displayed_then_shows_plain_number() {
    assert_eq!(format!("{}", HttpStatusCode(500)), "500");
    assert_eq!(format!("{}", HttpStatusCode(404)), "404");
}
