//! Login-response token extraction.
//!
//! Backends are known to place the issued token at three different
//! locations. Extraction is an explicit ordered list of pure
//! strategies, tried in fixed order until one yields a non-empty
//! value. The order is part of the contract: `data.token` wins over
//! top-level `token`, which wins over `access_token`.

use serde_json::Value;

/// A single extraction strategy: a pure lookup into the response body.
pub type TokenExtractor = fn(&Value) -> Option<&str>;

fn nested_data_token(body: &Value) -> Option<&str> {
    body.get("data")?.get("token")?.as_str()
}

fn top_level_token(body: &Value) -> Option<&str> {
    body.get("token")?.as_str()
}

fn top_level_access_token(body: &Value) -> Option<&str> {
    body.get("access_token")?.as_str()
}

/// Strategies in precedence order, with the shape name for logging.
pub const TOKEN_EXTRACTORS: &[(&str, TokenExtractor)] = &[
    ("data.token", nested_data_token),
    ("token", top_level_token),
    ("access_token", top_level_access_token),
];

/// Probe `body` with each strategy in order.
///
/// Returns the matched shape name and the token. Empty strings do not
/// count as a match; the next strategy is tried instead.
pub fn extract_login_token(body: &Value) -> Option<(&'static str, &str)> {
    for (shape, extractor) in TOKEN_EXTRACTORS {
        if let Some(token) = extractor(body) {
            if !token.is_empty() {
                return Some((shape, token));
            }
        }
    }
    None
}
