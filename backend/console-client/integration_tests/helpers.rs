// Shared fixtures for pipeline integration tests.

use console_client::client::ConsoleClient;
use console_client::config::ClientConfig;
use console_client::credential::MemoryCredentialStore;
use console_client::notify::Notifier;

use std::sync::{Arc, Mutex};

/// One captured presenter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Info(String),
    Warn(String),
    Error(String),
    Redirect(String),
}

/// Presenter that records every call for later assertions.
#[derive(Default)]
pub struct RecordingNotifier {
    notices: Mutex<Vec<Notice>>,
}

impl RecordingNotifier {
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier lock poisoned").clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.notices()
            .into_iter()
            .filter_map(|notice| match notice {
                Notice::Error(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notifier lock poisoned")
            .push(notice);
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, text: &str) {
        self.record(Notice::Success(text.to_owned()));
    }

    fn info(&self, text: &str) {
        self.record(Notice::Info(text.to_owned()));
    }

    fn warn(&self, text: &str) {
        self.record(Notice::Warn(text.to_owned()));
    }

    fn error(&self, text: &str) {
        self.record(Notice::Error(text.to_owned()));
    }

    fn redirect(&self, route: &str) {
        self.record(Notice::Redirect(route.to_owned()));
    }
}

/// Config pointed at a mock server.
pub fn test_config(base_url: &str) -> ClientConfig {
    let mut config = ClientConfig::default();
    config.base_url = base_url.to_owned();
    config
}

/// Client wired to a fresh in-memory store and a recording presenter.
pub fn build_client(
    base_url: &str,
) -> (
    ConsoleClient,
    Arc<MemoryCredentialStore>,
    Arc<RecordingNotifier>,
) {
    let store = Arc::new(MemoryCredentialStore::new());
    let notifier = Arc::new(RecordingNotifier::default());
    let client = ConsoleClient::new(&test_config(base_url), store.clone(), notifier.clone())
        .expect("client should build against a valid mock URL");
    (client, store, notifier)
}

/// The stored credential as a plain string, for assertions.
pub fn stored_token(store: &MemoryCredentialStore) -> Option<String> {
    use console_client::credential::CredentialStore;
    store.get().map(|token| token.as_str().to_owned())
}
