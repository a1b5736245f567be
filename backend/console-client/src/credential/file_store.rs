//! File-backed credential persistence.
//!
//! Storage directory lookup order:
//! 1. CONSOLE_DATA_DIR environment variable (explicit override)
//! 2. Platform-specific data directory via `dirs` crate
//!
//! Returns Result from path detection, never silently falls back to a
//! wrong path. Writes are atomic (temp file + rename). The store keeps
//! an in-memory copy so `get` on the hot request path never touches
//! the filesystem.

use crate::credential::CredentialStore;
use crate::error::credential::CredentialError;

use common::{ErrorLocation, RedactedToken};

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use log::{debug, info, warn};
use serde_json::Value;

/// File name under the data directory.
const CREDENTIAL_FILE_NAME: &str = "credential.json";

/// Environment override for the data directory.
const DATA_DIR_ENV: &str = "CONSOLE_DATA_DIR";

/// Application directory under the platform data dir.
const APP_DIR_NAME: &str = "console-admin";

/// Detect the credential file location.
///
/// # Errors
/// Returns [`CredentialError::PathDetection`] if neither the env
/// override nor a platform data directory is available.
pub fn detect_credential_file() -> Result<PathBuf, CredentialError> {
    if let Ok(custom_dir) = env::var(DATA_DIR_ENV) {
        let path = PathBuf::from(custom_dir).join(CREDENTIAL_FILE_NAME);
        info!("Using {} override: {:?}", DATA_DIR_ENV, path);
        return Ok(path);
    }

    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME).join(CREDENTIAL_FILE_NAME))
        .ok_or_else(|| {
            CredentialError::path_detection("no platform data directory available")
        })
}

/// Credential store persisted as JSON on disk.
pub struct FileCredentialStore {
    path: PathBuf,
    cached: RwLock<Option<RedactedToken>>,
}

impl FileCredentialStore {
    /// Open the store at the detected platform location.
    ///
    /// # Errors
    /// Returns [`CredentialError`] if path detection fails or an
    /// existing file is unreadable/corrupt. A missing file is not an
    /// error - the store starts out empty.
    pub fn open() -> Result<Self, CredentialError> {
        Self::open_at(detect_credential_file()?)
    }

    /// Open the store at an explicit path.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self, CredentialError> {
        let path = path.into();
        let cached = RwLock::new(load_token(&path)?);
        Ok(Self { path, cached })
    }

    /// Where the credential is persisted.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the token to disk using atomic temp-file + rename.
    fn persist(&self, token: &RedactedToken) -> Result<(), CredentialError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CredentialError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        // Serialized by hand: RedactedToken refuses serde serialization.
        let json = serde_json::json!({ "token": token.as_str() }).to_string();

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, json).map_err(|e| CredentialError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| CredentialError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: self.path.clone(),
            source: e,
        })?;

        debug!("Credential persisted to {}", self.path.display());
        Ok(())
    }

    fn remove_file(&self) -> Result<(), CredentialError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(CredentialError::WriteError {
                location: ErrorLocation::from(Location::caller()),
                path: self.path.clone(),
                source: e,
            }),
        }
    }
}

impl CredentialStore for FileCredentialStore {
    fn get(&self) -> Option<RedactedToken> {
        self.cached.read().ok().and_then(|guard| guard.clone())
    }

    /// Overwrites memory first, then disk. A persist failure is logged
    /// and leaves the in-memory credential usable for this process.
    fn set(&self, token: RedactedToken) {
        if let Err(error) = self.persist(&token) {
            warn!("Failed to persist credential: {}", error);
        }
        if let Ok(mut guard) = self.cached.write() {
            *guard = Some(token);
        }
    }

    fn clear(&self) {
        if let Err(error) = self.remove_file() {
            warn!("Failed to remove credential file: {}", error);
        }
        if let Ok(mut guard) = self.cached.write() {
            *guard = None;
        }
    }
}

/// Load a persisted token, if any.
fn load_token(path: &Path) -> Result<Option<RedactedToken>, CredentialError> {
    if !path.exists() {
        debug!("No credential file at {}", path.display());
        return Ok(None);
    }

    let contents = std::fs::read_to_string(path).map_err(|e| CredentialError::ReadError {
        location: ErrorLocation::from(Location::caller()),
        path: path.to_path_buf(),
        source: e,
    })?;

    let parsed: Value =
        serde_json::from_str(&contents).map_err(|e| CredentialError::ParseError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    match parsed.get("token").and_then(Value::as_str) {
        Some(token) if !token.is_empty() => {
            info!("Credential loaded from {}", path.display());
            Ok(Some(RedactedToken::new(token.to_owned())))
        }
        _ => {
            warn!(
                "Credential file {} has no usable token field",
                path.display()
            );
            Ok(None)
        }
    }
}
