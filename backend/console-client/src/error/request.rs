//! Error taxonomy for the request pipeline.
//!
//! Key design decisions:
//! - Business failures (`success: false` envelopes) are a result
//!   variant, not a panic or a side channel
//! - HTTP status codes stored directly (not parsed from strings)
//! - Transport failures keep the sent/not-sent distinction the
//!   classifier dispatches on
//! - All errors include ErrorLocation for debugging
//! - `#[track_caller]` for automatic location capture

use crate::envelope::{ErrorShowType, ResponseEnvelope};

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use serde_json::Value;
use thiserror::Error as ThisError;

/// Errors produced by the request pipeline.
#[derive(Debug, ThisError)]
pub enum RequestError {
    /// The server responded 2xx but declared `success: false`.
    #[error("Business Error: {message} {location}")]
    Biz {
        code: Option<i64>,
        message: String,
        show_type: ErrorShowType,
        data: Value,
        location: ErrorLocation,
    },

    /// The server responded with a non-2xx status.
    #[error("Server Error: HTTP {status_code} - {message} {location}")]
    Status {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    /// The request went out but no usable response came back.
    #[error("Network Error: {message} {location}")]
    Transport {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    /// The request never left the client (URL, builder).
    #[error("Request Build Error: {message} {location}")]
    Build {
        message: String,
        location: ErrorLocation,
    },

    /// The response body did not decode into the expected shape.
    #[error("Decode Error: {message} {location}")]
    Decode {
        message: String,
        location: ErrorLocation,
    },
}

impl RequestError {
    /// Synthesize the business error carried by a failed envelope.
    #[track_caller]
    pub fn from_envelope(envelope: ResponseEnvelope) -> Self {
        let show_type = envelope.presentation();
        RequestError::Biz {
            code: envelope.error_code,
            message: envelope.error_message.unwrap_or_default(),
            show_type,
            data: envelope.data,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn status(status_code: u16, message: impl Into<String>) -> Self {
        RequestError::Status {
            status_code: HttpStatusCode(status_code),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn build(message: impl Into<String>) -> Self {
        RequestError::Build {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn decode(message: impl Into<String>) -> Self {
        RequestError::Decode {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Get HTTP status code if applicable.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            RequestError::Status { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }

    /// Get the presentation action if this is a business error.
    pub fn show_type(&self) -> Option<ErrorShowType> {
        match self {
            RequestError::Biz { show_type, .. } => Some(*show_type),
            _ => None,
        }
    }

    /// Get error category for logging/metrics.
    pub fn category(&self) -> &'static str {
        match self {
            RequestError::Biz { .. } => "biz",
            RequestError::Status { status_code, .. } if status_code.is_client_error() => {
                "client_error"
            }
            RequestError::Status { status_code, .. } if status_code.is_server_error() => {
                "server_error"
            }
            RequestError::Status { .. } => "status",
            RequestError::Transport { is_timeout: true, .. } => "timeout",
            RequestError::Transport { is_connection: true, .. } => "connection",
            RequestError::Transport { .. } => "network",
            RequestError::Build { .. } => "build",
            RequestError::Decode { .. } => "decode",
        }
    }
}

impl From<url::ParseError> for RequestError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        RequestError::Build {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RequestError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        RequestError::Decode {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for RequestError {
    /// Categorize a transport-layer error.
    ///
    /// Timeouts and connection failures mean the request was sent but
    /// no response arrived; builder errors mean it never left the
    /// client; body-decode errors surface as [`RequestError::Decode`].
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        let is_timeout = error.is_timeout();
        let is_connection = error.is_connect();

        if is_timeout || is_connection {
            return RequestError::Transport {
                message: error.to_string(),
                is_timeout,
                is_connection,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        if let Some(status) = error.status() {
            return RequestError::Status {
                status_code: HttpStatusCode(status.as_u16()),
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        if error.is_builder() || error.is_request() {
            return RequestError::Build {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        if error.is_decode() {
            return RequestError::Decode {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        RequestError::Transport {
            message: error.to_string(),
            is_timeout: false,
            is_connection: false,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
