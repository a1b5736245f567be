//! Presenter boundary for user-facing notifications.
//!
//! The pipeline never renders anything itself; it hands short texts to
//! a [`Notifier`] owned by the host application. All methods are
//! fire-and-forget: no return value is consumed and failures to render
//! must not affect the pipeline.

use log::{error, info, warn};

/// Notification sink implemented by the host application's UI layer.
pub trait Notifier: Send + Sync {
    /// Non-blocking success toast (e.g. "token saved").
    fn success(&self, text: &str);

    /// Informational message.
    fn info(&self, text: &str);

    /// Non-blocking warning.
    fn warn(&self, text: &str);

    /// Blocking or prominent error message.
    fn error(&self, text: &str);

    /// Ask the host to navigate to `route`.
    ///
    /// Fired for the REDIRECT presentation action; headless hosts may
    /// ignore it.
    fn redirect(&self, route: &str);
}

/// Headless presenter that routes every notification into the log.
///
/// The default for embedding contexts without a UI (tests, CLIs,
/// background jobs).
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn success(&self, text: &str) {
        info!("{text}");
    }

    fn info(&self, text: &str) {
        info!("{text}");
    }

    fn warn(&self, text: &str) {
        warn!("{text}");
    }

    fn error(&self, text: &str) {
        error!("{text}");
    }

    fn redirect(&self, route: &str) {
        warn!("Redirect requested to {route} (headless presenter, ignoring)");
    }
}
