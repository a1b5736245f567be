//! Centralized error presentation.
//!
//! A pure dispatch from a failed request onto presenter actions. This
//! stage is advisory only: it never retries, never touches the
//! credential store, and never alters the error flowing back to the
//! caller. Callers that pass `skip_error_handler` are never routed
//! here.

use crate::envelope::ErrorShowType;
use crate::error::request::RequestError;
use crate::notify::Notifier;

use log::debug;

/// Surface a failed request to the user.
///
/// Business errors dispatch on their presentation action; transport
/// failures map onto the three coarse network/request messages. The
/// REDIRECT action asks the presenter to navigate to `login_route`.
pub fn surface_error(error: &RequestError, notifier: &dyn Notifier, login_route: &str) {
    match error {
        RequestError::Biz {
            code,
            message,
            show_type,
            ..
        } => match show_type {
            ErrorShowType::Silent => {}
            ErrorShowType::Warn => notifier.warn(message),
            ErrorShowType::Error => notifier.error(message),
            ErrorShowType::Notification => notifier.info(&notification_text(*code, message)),
            ErrorShowType::Redirect => notifier.redirect(login_route),
            ErrorShowType::Unrecognized(code) => {
                debug!("Unrecognized showType {}, treating as error", code);
                notifier.error(message);
            }
        },
        RequestError::Status { status_code, .. } => {
            notifier.error(&format!(
                "Network error: response status {}",
                status_code
            ));
        }
        RequestError::Transport { .. } => {
            notifier.error("Network error: no response, please retry.");
        }
        RequestError::Build { .. } | RequestError::Decode { .. } => {
            notifier.error("Request error, please retry.");
        }
    }
}

/// "{code}: {message}" when the server supplied a code.
fn notification_text(code: Option<i64>, message: &str) -> String {
    match code {
        Some(code) => format!("{}: {}", code, message),
        None => message.to_string(),
    }
}
