//! Error types for credential storage.

use common::ErrorLocation;

use std::panic::Location;
use std::path::PathBuf;

use thiserror::Error as ThisError;

/// Errors that can occur while persisting or loading the credential.
#[derive(Debug, ThisError)]
pub enum CredentialError {
    #[error("Credential Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Credential Parse Error: {path}: {reason} {location}")]
    ParseError {
        location: ErrorLocation,
        path: PathBuf,
        reason: String,
    },

    #[error("Credential Write Error: {path}: {source} {location}")]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Credential path detection failed: {message} {location}")]
    PathDetection {
        message: String,
        location: ErrorLocation,
    },

    #[error("Token rejected: {reason} {location}")]
    Validation {
        reason: TokenRejection,
        location: ErrorLocation,
    },
}

/// Specific reasons for rejecting an extracted token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRejection {
    Empty,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    PlaceholderDetected { pattern: &'static str },
}

impl std::fmt::Display for TokenRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "token is empty"),
            Self::TooShort { min, actual } => {
                write!(f, "token too short ({} chars, minimum {})", actual, min)
            }
            Self::TooLong { max, actual } => {
                write!(f, "token too long ({} chars, maximum {})", actual, max)
            }
            Self::PlaceholderDetected { pattern } => {
                write!(f, "detected placeholder pattern '{}'", pattern)
            }
        }
    }
}

impl CredentialError {
    #[track_caller]
    pub fn path_detection(message: impl Into<String>) -> Self {
        CredentialError::PathDetection {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(reason: TokenRejection) -> Self {
        CredentialError::Validation {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
