// Unit tests for login-token extraction.
// The strategy order is part of the pipeline contract.

use crate::extract::{TOKEN_EXTRACTORS, extract_login_token};
use serde_json::json;

/// **VALUE**: Verifies the full precedence chain when all three shapes are present.
///
/// **WHY THIS MATTERS**: Backends disagree about where the token lives. The
/// pipeline promises `data.token` wins over `token` wins over `access_token`;
/// pages and stored sessions depend on that exact choice.
///
/// **BUG THIS CATCHES**: Would catch a reordered strategy list or a strategy
/// reading the wrong field.
#[test]
fn given_all_three_shapes_when_extracted_then_nested_data_token_wins() {
    // GIVEN: A body carrying every known token location
    let body = json!({
        "data": { "token": "A" },
        "token": "B",
        "access_token": "C"
    });

    // WHEN: Extracting
    let result = extract_login_token(&body);

    // THEN: The nested shape wins
    assert_eq!(result, Some(("data.token", "A")));
}

/// **VALUE**: Verifies the fallback to top-level `token`.
///
/// **BUG THIS CATCHES**: Would catch a chain that stops after the first
/// strategy misses.
#[test]
fn given_no_nested_token_when_extracted_then_top_level_token_wins() {
    let body = json!({ "token": "B", "access_token": "C" });

    assert_eq!(extract_login_token(&body), Some(("token", "B")));
}

/// **VALUE**: Verifies the last-resort `access_token` shape.
///
/// **BUG THIS CATCHES**: Would catch dropping OAuth-style bodies entirely.
#[test]
fn given_only_access_token_when_extracted_then_access_token_wins() {
    let body = json!({ "access_token": "C" });

    assert_eq!(extract_login_token(&body), Some(("access_token", "C")));
}

/// **VALUE**: Verifies that a tokenless body yields None.
///
/// **WHY THIS MATTERS**: The response observer must leave the credential
/// unchanged when extraction fails; None is the signal for that.
///
/// **BUG THIS CATCHES**: Would catch a strategy misreading an unrelated field
/// as a token.
#[test]
fn given_no_token_anywhere_when_extracted_then_returns_none() {
    let body = json!({ "data": { "user": { "id": 1 } }, "message": "ok" });

    assert_eq!(extract_login_token(&body), None);
}

/// **VALUE**: Verifies empty strings do not count as a match.
///
/// **WHY THIS MATTERS**: "First non-empty match" is the documented rule. An
/// empty `data.token` must not shadow a usable top-level `token`.
///
/// **BUG THIS CATCHES**: Would catch a chain that stops at the first present
/// (rather than first non-empty) value.
#[test]
fn given_empty_preferred_shape_when_extracted_then_falls_through_to_next() {
    let body = json!({ "data": { "token": "" }, "token": "B" });

    assert_eq!(extract_login_token(&body), Some(("token", "B")));
}

/// **VALUE**: Verifies non-string token fields are skipped.
///
/// **BUG THIS CATCHES**: Would catch a numeric `token` field being stringified
/// and stored as a bogus credential.
#[test]
fn given_non_string_token_when_extracted_then_falls_through() {
    let body = json!({ "token": 12345, "access_token": "C" });

    assert_eq!(extract_login_token(&body), Some(("access_token", "C")));
}

/// **VALUE**: Verifies extraction is a pure read.
///
/// **WHY THIS MATTERS**: The response observer may conceptually run more than
/// once over the same response; the stored credential must not depend on how
/// many times the body was probed.
///
/// **BUG THIS CATCHES**: Would catch extraction mutating or consuming state.
#[test]
fn given_same_body_when_extracted_twice_then_results_are_identical() {
    let body = json!({ "data": { "token": "A" }, "token": "B" });

    let first = extract_login_token(&body);
    let second = extract_login_token(&body);

    assert_eq!(first, second);
    assert_eq!(first, Some(("data.token", "A")));
}

/// **VALUE**: Pins the strategy table itself (names and order).
///
/// **BUG THIS CATCHES**: Would catch an accidental insertion or reorder that
/// silently changes precedence.
#[test]
fn given_strategy_table_when_inspected_then_order_is_documented_contract() {
    let names: Vec<&str> = TOKEN_EXTRACTORS.iter().map(|(name, _)| *name).collect();

    assert_eq!(names, vec!["data.token", "token", "access_token"]);
}
