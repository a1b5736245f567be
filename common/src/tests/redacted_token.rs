use crate::RedactedToken;

/// **VALUE**: Verifies Debug and Display never expose the token value.
///
/// **WHY THIS MATTERS**: RedactedToken exists solely to keep credentials out
/// of logs. The pipeline logs request metadata at debug level; a leaking
/// Debug impl would put live bearer tokens into log files.
///
/// **BUG THIS CATCHES**: Would catch a derived Debug impl (or a formatting
/// change) that prints the inner string.
#[test]
fn given_token_when_debug_or_display_formatted_then_value_is_redacted() {
    // GIVEN: A token with a known secret value
    let token = RedactedToken::new(String::from("super-secret-bearer"));

    // WHEN: Formatting through Debug and Display
    let debug = format!("{:?}", token);
    let display = format!("{}", token);

    // THEN: Neither output contains the secret
    assert!(!debug.contains("super-secret-bearer"), "Debug must redact");
    assert!(
        !display.contains("super-secret-bearer"),
        "Display must redact"
    );
    assert!(debug.contains("REDACTED"), "Debug should say REDACTED");
}

/// **VALUE**: Verifies the value is still reachable for transmission.
///
/// **WHY THIS MATTERS**: The request interceptor needs the raw value to build
/// the `Authorization: Bearer` header. Redaction must not make the token
/// unusable.
///
/// **BUG THIS CATCHES**: Would catch `as_str()`/`len()` diverging from the
/// stored value.
#[test]
fn given_token_when_accessed_explicitly_then_value_and_length_available() {
    let token = RedactedToken::new(String::from("abc123"));

    assert_eq!(token.as_str(), "abc123");
    assert_eq!(token.len(), 6);
    assert!(!token.is_empty());
}

/// **VALUE**: Verifies serde serialization is refused.
///
/// **WHY THIS MATTERS**: Config and credential files are serialized with
/// serde. A RedactedToken accidentally embedded in a serializable struct must
/// fail loudly instead of writing the secret to disk.
///
/// **BUG THIS CATCHES**: Would catch someone replacing the refusing Serialize
/// impl with a derive.
#[test]
fn given_token_when_serialized_then_serialization_fails() {
    let token = RedactedToken::new(String::from("do-not-persist"));

    let result = serde_json::to_string(&token);

    assert!(result.is_err(), "Serialization must be refused");
}
