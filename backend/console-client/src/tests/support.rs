// Shared fixtures for unit tests.

use crate::notify::Notifier;

use std::sync::Mutex;

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
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices.lock().expect("notifier lock poisoned").clone()
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

impl RecordingNotifier {
    fn record(&self, notice: Notice) {
        self.notices
            .lock()
            .expect("notifier lock poisoned")
            .push(notice);
    }
}
