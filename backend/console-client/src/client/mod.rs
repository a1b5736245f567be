//! Outbound request pipeline.
//!
//! Every API call flows through three stages around the transport:
//!
//! 1. Request interception - strip any caller-supplied `token` query
//!    parameter, attach the stored credential as a bearer header, tag
//!    the request with a correlation id.
//! 2. The transport call itself.
//! 3. Response observation - capture a fresh token from login
//!    responses, fire the coarse failure notification for
//!    `success: false` envelopes.
//!
//! Failures are normalized into [`RequestError`] and, unless the
//! caller opts out, surfaced through the centralized classifier. The
//! classifier never changes what the caller receives.

use crate::classify;
use crate::config::ClientConfig;
use crate::credential::{CredentialStore, TokenValidator};
use crate::envelope::ResponseEnvelope;
use crate::error::request::RequestError;
use crate::extract;
use crate::notify::Notifier;

use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::{AUTHORIZATION, HeaderValue};
use reqwest::{Client, Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;
use uuid::Uuid;

/// Query parameter that must never reach the wire.
const TOKEN_QUERY_PARAM: &str = "token";

/// Correlation id header attached to every request.
const REQUEST_ID_HEADER: &str = "x-request-id";

/// Success toast after a login token is persisted.
const TOKEN_SAVED_MESSAGE: &str = "Authentication token saved";

/// Coarse catch-all for `success: false` envelopes.
const REQUEST_FAILED_MESSAGE: &str = "Request failed!";

/// Per-call options bag.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestOptions {
    /// Escape hatch: when set, the centralized classifier is not
    /// invoked and the error propagates unmodified to the caller's own
    /// handling path.
    pub skip_error_handler: bool,
}

/// Client for the admin console REST API.
///
/// Cheap to clone; all clones share the transport, the credential
/// store, and the presenter.
#[derive(Clone)]
pub struct ConsoleClient {
    base_url: Url,
    pub(crate) http: Client,
    pub(crate) credentials: Arc<dyn CredentialStore>,
    notifier: Arc<dyn Notifier>,
    pub(crate) login_path: String,
    login_route: String,
}

impl ConsoleClient {
    /// Build a client from config, an injected credential store, and a
    /// presenter.
    ///
    /// # Errors
    /// Returns [`RequestError::Build`] if the base URL does not parse
    /// or the transport cannot be constructed.
    pub fn new(
        config: &ClientConfig,
        credentials: Arc<dyn CredentialStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Result<Self, RequestError> {
        let base_url = Url::parse(&config.base_url)?;
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            base_url,
            http,
            credentials,
            notifier,
            login_path: config.login_path.clone(),
            login_route: config.login_route.clone(),
        })
    }

    /// Resolve an API path against the base URL.
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        Ok(self.base_url.join(path)?)
    }

    /// Generic entry point for callers outside the typed services.
    pub async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<Value, RequestError> {
        let url = self.endpoint(path)?;
        let mut builder = self.http.request(method, url);
        if let Some(body) = body {
            builder = builder.json(&body);
        }
        self.dispatch(builder, options).await
    }

    /// Run a prepared request through the pipeline and decode the
    /// envelope payload.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        options: RequestOptions,
    ) -> Result<T, RequestError> {
        let result = match self.run(builder).await {
            Ok(data) => serde_json::from_value(data).map_err(RequestError::from),
            Err(error) => Err(error),
        };

        result.map_err(|error| {
            if !options.skip_error_handler {
                classify::surface_error(&error, self.notifier.as_ref(), &self.login_route);
            }
            error
        })
    }

    /// The pipeline proper: intercept, transmit, observe, decode.
    async fn run(&self, builder: RequestBuilder) -> Result<Value, RequestError> {
        let mut request = builder.build()?;
        self.prepare_request(&mut request);

        let path = request.url().path().to_string();
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::status(
                status.as_u16(),
                response.text().await.unwrap_or_default(),
            ));
        }

        let body: Value = response.json().await?;
        self.observe_response(&path, &body);

        let envelope = ResponseEnvelope::from_value(body);
        if !envelope.success {
            // Coarse catch-all, independent of the classifier. Fires
            // even for opted-out calls, like the success toast above.
            self.notifier.error(REQUEST_FAILED_MESSAGE);
            return Err(RequestError::from_envelope(envelope));
        }

        Ok(envelope.data)
    }

    /// Request interceptor. Never fails the request; a missing
    /// credential simply produces an unauthenticated call.
    fn prepare_request(&self, request: &mut Request) {
        strip_token_param(request.url_mut());

        if let Some(token) = self.credentials.get() {
            match HeaderValue::from_str(&format!("Bearer {}", token.as_str())) {
                Ok(mut value) => {
                    value.set_sensitive(true);
                    request.headers_mut().insert(AUTHORIZATION, value);
                }
                Err(error) => {
                    warn!("Stored credential is not a valid header value: {}", error);
                }
            }
        }

        let request_id = Uuid::new_v4().to_string();
        if let Ok(value) = HeaderValue::from_str(&request_id) {
            request.headers_mut().insert(REQUEST_ID_HEADER, value);
        }

        debug!(
            "{} {} ({})",
            request.method(),
            request.url().path(),
            request_id
        );
    }

    /// Response observer. Must never fail: extraction or validation
    /// problems leave the credential unchanged. Pure over the body, so
    /// running it twice on the same response is a no-op the second
    /// time around.
    fn observe_response(&self, path: &str, body: &Value) {
        if path != self.login_path {
            return;
        }

        match extract::extract_login_token(body) {
            Some((shape, token)) => {
                debug!("Login token found via '{}' ({} chars)", shape, token.len());
                match TokenValidator::default().validate_and_wrap(token.to_owned()) {
                    Ok(redacted) => {
                        self.credentials.set(redacted);
                        self.notifier.success(TOKEN_SAVED_MESSAGE);
                    }
                    Err(error) => warn!("Rejected login token: {}", error),
                }
            }
            None => debug!("Login response carried no token"),
        }
    }
}

/// Remove every query pair named `token`, unconditionally.
///
/// Defense against credential confusion: a caller- or attacker-supplied
/// `token` query parameter must never override header auth.
pub(crate) fn strip_token_param(url: &mut Url) {
    if url.query().is_none() {
        return;
    }

    let retained: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(name, _)| name != TOKEN_QUERY_PARAM)
        .map(|(name, value)| (name.into_owned(), value.into_owned()))
        .collect();

    if retained.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(retained);
    }
}
