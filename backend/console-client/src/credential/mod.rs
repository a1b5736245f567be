//! Credential storage for the bearer token.
//!
//! At most one credential is active at a time. The pipeline reads it
//! on every outbound request and overwrites it when a login (or token
//! refresh) succeeds; it is destroyed only by explicit logout or a
//! manual clear. The store is injected into the pipeline constructor,
//! its lifecycle owned by the host application.

pub mod file_store;
pub mod validation;

pub use file_store::FileCredentialStore;
pub use validation::TokenValidator;

use common::RedactedToken;

use std::sync::RwLock;

/// Process-wide bearer-credential storage.
///
/// Reads and writes may race across concurrent calls; last-writer-wins
/// is acceptable since logins are rare and not concurrent with each
/// other in practice.
pub trait CredentialStore: Send + Sync {
    /// The currently active credential, if any.
    fn get(&self) -> Option<RedactedToken>;

    /// Replace the active credential.
    fn set(&self, token: RedactedToken);

    /// Destroy the active credential.
    fn clear(&self);
}

/// In-memory store for hosts that do not persist sessions.
#[derive(Default)]
pub struct MemoryCredentialStore {
    token: RwLock<Option<RedactedToken>>,
}

impl MemoryCredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start out already authenticated.
    pub fn with_token(token: RedactedToken) -> Self {
        Self {
            token: RwLock::new(Some(token)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn get(&self) -> Option<RedactedToken> {
        self.token.read().ok().and_then(|guard| guard.clone())
    }

    fn set(&self, token: RedactedToken) {
        if let Ok(mut guard) = self.token.write() {
            *guard = Some(token);
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            *guard = None;
        }
    }
}
