//! Response envelope contract shared with the backend.
//!
//! Every API response is expected to follow the wrapper shape
//! `{ success, data, errorCode, errorMessage, showType }`. Bodies that
//! do not carry a boolean `success` field are treated as bare payloads:
//! some endpoints (notably login) return their own shapes and the
//! pipeline must not reject them.

use serde_json::Value;

/// Presentation action attached to a failed envelope.
///
/// Wire codes: `SILENT(0)`, `WARN(1)`, `ERROR(2)`, `NOTIFICATION(3)`,
/// `REDIRECT(9)`. Codes outside this set are preserved and classified
/// with ERROR behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorShowType {
    Silent,
    Warn,
    Error,
    Notification,
    Redirect,
    Unrecognized(u32),
}

impl ErrorShowType {
    pub fn from_code(code: u32) -> Self {
        match code {
            0 => ErrorShowType::Silent,
            1 => ErrorShowType::Warn,
            2 => ErrorShowType::Error,
            3 => ErrorShowType::Notification,
            9 => ErrorShowType::Redirect,
            other => ErrorShowType::Unrecognized(other),
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            ErrorShowType::Silent => 0,
            ErrorShowType::Warn => 1,
            ErrorShowType::Error => 2,
            ErrorShowType::Notification => 3,
            ErrorShowType::Redirect => 9,
            ErrorShowType::Unrecognized(code) => *code,
        }
    }
}

/// The decoded wrapper around an API response body.
#[derive(Debug, Clone)]
pub struct ResponseEnvelope {
    pub success: bool,
    pub data: Value,
    pub error_code: Option<i64>,
    pub error_message: Option<String>,
    pub show_type: Option<u32>,
}

impl ResponseEnvelope {
    /// Interpret a decoded JSON body.
    ///
    /// A JSON object with a boolean `success` field is an envelope; its
    /// known fields are lifted out and everything the server put under
    /// `data` becomes the payload. Anything else is a bare payload and
    /// wraps into a successful envelope unchanged.
    pub fn from_value(body: Value) -> Self {
        match body {
            Value::Object(mut map) => match map.get("success").and_then(Value::as_bool) {
                Some(success) => Self {
                    success,
                    data: map.remove("data").unwrap_or(Value::Null),
                    error_code: map.get("errorCode").and_then(Value::as_i64),
                    error_message: map
                        .get("errorMessage")
                        .and_then(Value::as_str)
                        .map(str::to_owned),
                    show_type: map
                        .get("showType")
                        .and_then(Value::as_u64)
                        .map(|code| code as u32),
                },
                None => Self::bare(Value::Object(map)),
            },
            other => Self::bare(other),
        }
    }

    /// Wrap a body that never was an envelope.
    fn bare(data: Value) -> Self {
        Self {
            success: true,
            data,
            error_code: None,
            error_message: None,
            show_type: None,
        }
    }

    /// The presentation action for a failed envelope.
    ///
    /// An absent `showType` gets ERROR behavior, matching the
    /// classifier's fallback arm.
    pub fn presentation(&self) -> ErrorShowType {
        self.show_type
            .map(ErrorShowType::from_code)
            .unwrap_or(ErrorShowType::Error)
    }
}
