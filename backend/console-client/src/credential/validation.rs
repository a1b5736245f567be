//! Token screening before persistence.
//!
//! Validates extracted login tokens BEFORE storing them, to fail fast
//! on obviously broken values (empty strings, fixture placeholders a
//! misconfigured backend may echo back).

use crate::error::credential::{CredentialError, TokenRejection};

use common::RedactedToken;

/// Validation result for an extracted token.
#[derive(Debug)]
pub enum ValidationResult {
    Valid,
    Invalid(TokenRejection),
}

/// Screening rules for bearer tokens.
///
/// Deliberately permissive by default: the backend may issue opaque
/// tokens of any length, so only emptiness, an upper length bound, and
/// placeholder text are screened. Hosts that know their token format
/// can tighten the bounds with [`TokenValidator::new`].
pub struct TokenValidator {
    min_length: usize,
    max_length: usize,
}

impl Default for TokenValidator {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: 4096, // Allow long JWTs
        }
    }
}

impl TokenValidator {
    /// Screening with explicit length bounds.
    pub fn new(min_length: usize, max_length: usize) -> Self {
        Self {
            min_length,
            max_length,
        }
    }

    /// Validate a token value.
    pub fn validate(&self, token: &str) -> ValidationResult {
        let trimmed = token.trim();

        if trimmed.is_empty() {
            return ValidationResult::Invalid(TokenRejection::Empty);
        }

        if trimmed.len() < self.min_length {
            return ValidationResult::Invalid(TokenRejection::TooShort {
                min: self.min_length,
                actual: trimmed.len(),
            });
        }

        if trimmed.len() > self.max_length {
            return ValidationResult::Invalid(TokenRejection::TooLong {
                max: self.max_length,
                actual: trimmed.len(),
            });
        }

        if let Some(pattern) = detect_placeholder(trimmed) {
            return ValidationResult::Invalid(TokenRejection::PlaceholderDetected { pattern });
        }

        ValidationResult::Valid
    }

    /// Validate and wrap in RedactedToken if valid.
    #[track_caller]
    pub fn validate_and_wrap(&self, token: String) -> Result<RedactedToken, CredentialError> {
        match self.validate(&token) {
            ValidationResult::Valid => Ok(RedactedToken::new(token)),
            ValidationResult::Invalid(reason) => Err(CredentialError::validation(reason)),
        }
    }
}

/// Detect common placeholder patterns.
///
/// Returns the matched pattern name if detected.
fn detect_placeholder(token: &str) -> Option<&'static str> {
    let lower = token.to_lowercase();

    static PATTERNS: &[(&str, &str)] = &[
        ("your-token", "your-token"),
        ("your_token", "your_token"),
        ("placeholder", "placeholder"),
        ("example", "example"),
        ("<token", "<token>"),
        ("changeme", "changeme"),
        ("dummy", "dummy"),
        ("fake-", "fake-"),
    ];

    for (pattern, name) in PATTERNS {
        if lower.contains(pattern) {
            return Some(name);
        }
    }

    // Repeated single character (e.g. "xxxxxxxxxx")
    if token.len() >= 10 {
        let mut chars = token.chars();
        if let Some(first) = chars.next() {
            if chars.all(|c| c == first) {
                return Some("repeated_char");
            }
        }
    }

    None
}
