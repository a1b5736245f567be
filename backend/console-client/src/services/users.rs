//! User management endpoints.

use crate::client::{ConsoleClient, RequestOptions};
use crate::error::request::RequestError;
use crate::services::{ListResult, SortOrder};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const USERS_PATH: &str = "/api/users";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub name: Option<String>,
    pub role: Option<String>,
    pub status: Option<UserStatus>,
    pub created_at: String,
    pub updated_at: String,
}

/// Query parameters for the user list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<SortOrder>,
}

/// Fields accepted by create/update. All optional; the backend fills
/// in what it needs and rejects what is missing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

impl ConsoleClient {
    pub async fn user_list(
        &self,
        params: &UserListParams,
    ) -> Result<ListResult<User>, RequestError> {
        let url = self.endpoint(USERS_PATH)?;
        self.dispatch(self.http.get(url).query(params), RequestOptions::default())
            .await
    }

    pub async fn user_detail(&self, id: u64) -> Result<User, RequestError> {
        let url = self.endpoint(&format!("{USERS_PATH}/{id}"))?;
        self.dispatch(self.http.get(url), RequestOptions::default())
            .await
    }

    pub async fn create_user(&self, draft: &UserDraft) -> Result<User, RequestError> {
        let url = self.endpoint(USERS_PATH)?;
        self.dispatch(
            self.http.post(url).json(draft),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn update_user(&self, id: u64, draft: &UserDraft) -> Result<User, RequestError> {
        let url = self.endpoint(&format!("{USERS_PATH}/{id}"))?;
        self.dispatch(self.http.put(url).json(draft), RequestOptions::default())
            .await
    }

    pub async fn delete_user(&self, id: u64) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{USERS_PATH}/{id}"))?;
        self.dispatch(self.http.delete(url), RequestOptions::default())
            .await
    }

    pub async fn batch_delete_users(&self, ids: &[u64]) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{USERS_PATH}/batch"))?;
        self.dispatch(
            self.http.delete(url).json(&json!({ "ids": ids })),
            RequestOptions::default(),
        )
        .await
    }

    pub async fn update_user_status(
        &self,
        id: u64,
        status: UserStatus,
    ) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{USERS_PATH}/{id}/status"))?;
        self.dispatch(
            self.http.put(url).json(&json!({ "status": status })),
            RequestOptions::default(),
        )
        .await
    }
}
