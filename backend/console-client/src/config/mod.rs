//! Client configuration with file and environment layering.
//!
//! Values resolve in order: defaults, then `console.toml` in the
//! config directory, then environment variables (optionally loaded
//! from a `.env` file). Environment always wins.

use crate::ADMIN_SERVER_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::env;
use std::panic::Location;
use std::path::Path;
use std::time::Duration;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "console.toml";
const CONFIG_VERSION: u32 = 1;

/// Environment override for the API base URL.
const BASE_URL_ENV: &str = "CONSOLE_BASE_URL";

/// Environment override for the transport timeout.
const TIMEOUT_ENV: &str = "CONSOLE_TIMEOUT_SECS";

// ============================================
// CONFIG STRUCT
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    /// Base URL every request path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path whose responses are probed for a fresh token.
    #[serde(default = "default_login_path")]
    pub login_path: String,

    /// Route the presenter is asked to navigate to on REDIRECT.
    #[serde(default = "default_login_route")]
    pub login_route: String,

    /// Transport timeout applied at client construction.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            base_url: default_base_url(),
            login_path: default_login_path(),
            login_route: default_login_route(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    ADMIN_SERVER_BASE_URL.to_string()
}
fn default_login_path() -> String {
    "/api/auth/login".to_string()
}
fn default_login_route() -> String {
    "/user/login".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

// ============================================
// IMPLEMENTATION
// ============================================

impl ClientConfig {
    /// Load config from {config_dir}/console.toml.
    ///
    /// A missing file yields defaults; an existing but corrupt file is
    /// an error.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: ClientConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config TOML: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Load config, apply environment overrides, and validate.
    pub fn load_with_env(config_dir: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(config_dir)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Overlay environment variables onto the loaded values.
    ///
    /// Tries to load a `.env` file first (non-fatal if missing).
    pub fn apply_env_overrides(&mut self) {
        if !try_load_dotenv() {
            debug!("No .env file found - using existing environment variables");
        }

        if let Ok(value) = env::var(BASE_URL_ENV) {
            if value.is_empty() {
                warn!("{} is set but empty, ignoring", BASE_URL_ENV);
            } else {
                info!("Base URL overridden via {}", BASE_URL_ENV);
                self.base_url = value;
            }
        }

        if let Ok(value) = env::var(TIMEOUT_ENV) {
            match value.parse::<u64>() {
                Ok(secs) => {
                    info!("Timeout overridden via {}: {}s", TIMEOUT_ENV, secs);
                    self.timeout_secs = secs;
                }
                Err(e) => warn!("Ignoring invalid {}: {}", TIMEOUT_ENV, e),
            }
        }
    }

    /// Save config to {config_dir}/console.toml using atomic write.
    ///
    /// Uses temp file + rename for atomicity (no corruption on crash).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if directory creation, serialization,
    /// write, or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let rendered = toml::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, rendered).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if let Err(e) = Url::parse(&self.base_url) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Invalid base_url '{}': {}", self.base_url, e),
            });
        }

        if !self.login_path.starts_with('/') {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("login_path must start with '/': '{}'", self.login_path),
            });
        }

        if !self.login_route.starts_with('/') {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("login_route must start with '/': '{}'", self.login_route),
            });
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "timeout_secs must be greater than zero".to_string(),
            });
        }

        Ok(())
    }

    /// Transport timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Attempts to load .env from known locations.
fn try_load_dotenv() -> bool {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return true;
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return true;
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    false
}
