// Unit tests for envelope decoding and showType mapping.

use crate::envelope::{ErrorShowType, ResponseEnvelope};
use serde_json::json;

/// **VALUE**: Verifies a failed envelope lifts all its error fields.
///
/// **WHY THIS MATTERS**: The business-error variant is synthesized from these
/// fields; a dropped field means the classifier presents the wrong text or
/// action.
///
/// **BUG THIS CATCHES**: Would catch wrong field names (the wire contract is
/// camelCase: errorCode/errorMessage/showType).
#[test]
fn given_failed_envelope_when_decoded_then_error_fields_are_lifted() {
    let envelope = ResponseEnvelope::from_value(json!({
        "success": false,
        "data": { "detail": 1 },
        "errorCode": 4001,
        "errorMessage": "quota exceeded",
        "showType": 1
    }));

    assert!(!envelope.success);
    assert_eq!(envelope.error_code, Some(4001));
    assert_eq!(envelope.error_message.as_deref(), Some("quota exceeded"));
    assert_eq!(envelope.show_type, Some(1));
    assert_eq!(envelope.data, json!({ "detail": 1 }));
}

/// **VALUE**: Verifies a body without a boolean `success` field passes through
/// as a bare payload.
///
/// **WHY THIS MATTERS**: Login (and some legacy endpoints) return their own
/// shapes. Treating them as failures would make login impossible.
///
/// **BUG THIS CATCHES**: Would catch the envelope decoder rejecting or
/// mangling non-envelope bodies.
#[test]
fn given_envelope_less_body_when_decoded_then_whole_body_is_the_payload() {
    let body = json!({ "code": 200, "message": "ok", "data": { "token": "t" } });

    let envelope = ResponseEnvelope::from_value(body.clone());

    assert!(envelope.success);
    assert_eq!(envelope.data, body);
    assert_eq!(envelope.error_code, None);
}

/// **VALUE**: Verifies non-object bodies (arrays, scalars) are bare payloads.
///
/// **BUG THIS CATCHES**: Would catch a decoder that assumes every body is an
/// object and panics or errors on `[...]` responses.
#[test]
fn given_array_body_when_decoded_then_wrapped_as_success() {
    let envelope = ResponseEnvelope::from_value(json!([1, 2, 3]));

    assert!(envelope.success);
    assert_eq!(envelope.data, json!([1, 2, 3]));
}

/// **VALUE**: Verifies the wire-code mapping of every documented showType.
///
/// **BUG THIS CATCHES**: Would catch a transposed code (e.g. WARN and ERROR
/// swapped), which would silently change how failures present.
#[test]
fn given_documented_codes_when_mapped_then_each_yields_its_show_type() {
    assert_eq!(ErrorShowType::from_code(0), ErrorShowType::Silent);
    assert_eq!(ErrorShowType::from_code(1), ErrorShowType::Warn);
    assert_eq!(ErrorShowType::from_code(2), ErrorShowType::Error);
    assert_eq!(ErrorShowType::from_code(3), ErrorShowType::Notification);
    assert_eq!(ErrorShowType::from_code(9), ErrorShowType::Redirect);
}

/// **VALUE**: Verifies unknown codes are preserved, not collapsed.
///
/// **WHY THIS MATTERS**: The classifier logs the raw code before falling back
/// to ERROR behavior; collapsing early would lose the evidence.
///
/// **BUG THIS CATCHES**: Would catch mapping unknown codes straight to
/// `Error`.
#[test]
fn given_unknown_code_when_mapped_then_preserved_as_unrecognized() {
    let show_type = ErrorShowType::from_code(7);

    assert_eq!(show_type, ErrorShowType::Unrecognized(7));
    assert_eq!(show_type.code(), 7);
}

/// **VALUE**: Verifies an absent showType defaults to ERROR presentation.
///
/// **BUG THIS CATCHES**: Would catch failed envelopes without a showType
/// becoming silent.
#[test]
fn given_envelope_without_show_type_when_presented_then_error_behavior() {
    let envelope = ResponseEnvelope::from_value(json!({
        "success": false,
        "errorMessage": "nope"
    }));

    assert_eq!(envelope.presentation(), ErrorShowType::Error);
}
