//! Authentication and account endpoints.
//!
//! Login responses flow through the pipeline's response observer,
//! which persists the issued token; nothing here handles the
//! credential directly except logout (which destroys it) and refresh
//! (whose response the observer does not see, so it extracts by hand).

use crate::client::{ConsoleClient, RequestOptions};
use crate::credential::TokenValidator;
use crate::error::request::RequestError;
use crate::extract;
use crate::services::users::User;

use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

pub const AUTH_PATH: &str = "/api/auth";
pub const CAPTCHA_PATH: &str = "/api/captcha";

#[derive(Debug, Clone, Serialize)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterParams {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChangePasswordParams {
    pub current_password: String,
    pub new_password: String,
}

impl ConsoleClient {
    /// Authenticate against the configured login path.
    ///
    /// On success the response observer has already persisted the
    /// issued token; the raw body is returned for callers that need
    /// the embedded user record (its shape varies by backend).
    pub async fn login(&self, params: &LoginParams) -> Result<Value, RequestError> {
        let path = self.login_path.clone();
        let url = self.endpoint(&path)?;
        self.dispatch(self.http.post(url).json(params), RequestOptions::default())
            .await
    }

    pub async fn register(&self, params: &RegisterParams) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{AUTH_PATH}/register"))?;
        self.dispatch(self.http.post(url).json(params), RequestOptions::default())
            .await
    }

    /// End the session and destroy the stored credential.
    pub async fn logout(&self) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{AUTH_PATH}/logout"))?;
        let result = self
            .dispatch(self.http.delete(url), RequestOptions::default())
            .await;

        if result.is_ok() {
            self.credentials.clear();
            debug!("Credential cleared after logout");
        }
        result
    }

    pub async fn current_user(&self) -> Result<User, RequestError> {
        let url = self.endpoint(&format!("{AUTH_PATH}/me"))?;
        self.dispatch(self.http.get(url), RequestOptions::default())
            .await
    }

    pub async fn update_profile(
        &self,
        fields: &HashMap<String, Value>,
    ) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{AUTH_PATH}/profile"))?;
        self.dispatch(self.http.put(url).json(fields), RequestOptions::default())
            .await
    }

    pub async fn change_password(
        &self,
        params: &ChangePasswordParams,
    ) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{AUTH_PATH}/password"))?;
        self.dispatch(self.http.put(url).json(params), RequestOptions::default())
            .await
    }

    /// Rotate the credential.
    ///
    /// The refresh path is not the login path, so the response
    /// observer stays out of it; the token is extracted here with the
    /// same ordered strategies and overwrites the stored credential.
    pub async fn refresh_token(&self) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{AUTH_PATH}/refresh"))?;
        let body: Value = self
            .dispatch(self.http.post(url), RequestOptions::default())
            .await?;

        match extract::extract_login_token(&body) {
            Some((shape, token)) => {
                debug!("Refresh token found via '{}'", shape);
                match TokenValidator::default().validate_and_wrap(token.to_owned()) {
                    Ok(redacted) => self.credentials.set(redacted),
                    Err(error) => warn!("Rejected refreshed token: {}", error),
                }
            }
            None => debug!("Refresh response carried no token"),
        }

        Ok(body)
    }

    /// Request a login captcha for a phone number.
    pub async fn captcha(&self, phone: &str) -> Result<Value, RequestError> {
        let url = self.endpoint(CAPTCHA_PATH)?;
        self.dispatch(
            self.http
                .post(url)
                .json(&serde_json::json!({ "phone": phone })),
            RequestOptions::default(),
        )
        .await
    }
}
