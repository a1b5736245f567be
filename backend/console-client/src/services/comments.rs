//! Comment moderation endpoints.

use crate::client::{ConsoleClient, RequestOptions};
use crate::error::request::RequestError;
use crate::services::{ListResult, SortOrder};

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

pub const COMMENTS_PATH: &str = "/api/comments";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommentStatus {
    Pending,
    Approved,
    Rejected,
}

/// Outcome of a moderation review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewDecision {
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comment {
    pub id: u64,
    pub content: String,
    pub status: CommentStatus,
    pub user_id: u64,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
    pub parent_id: Option<u64>,
    pub created_at: String,
    pub updated_at: String,
}

/// Query parameters for the comment list.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<SortOrder>,
}

/// Fields accepted by create/update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CommentDraft {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CommentStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<u64>,
}

impl ConsoleClient {
    pub async fn comment_list(
        &self,
        params: &CommentListParams,
    ) -> Result<ListResult<Comment>, RequestError> {
        let url = self.endpoint(COMMENTS_PATH)?;
        self.dispatch(self.http.get(url).query(params), RequestOptions::default())
            .await
    }

    pub async fn comment_detail(&self, id: u64) -> Result<Comment, RequestError> {
        let url = self.endpoint(&format!("{COMMENTS_PATH}/{id}"))?;
        self.dispatch(self.http.get(url), RequestOptions::default())
            .await
    }

    pub async fn create_comment(&self, draft: &CommentDraft) -> Result<Comment, RequestError> {
        let url = self.endpoint(COMMENTS_PATH)?;
        self.dispatch(self.http.post(url).json(draft), RequestOptions::default())
            .await
    }

    pub async fn update_comment(
        &self,
        id: u64,
        draft: &CommentDraft,
    ) -> Result<Comment, RequestError> {
        let url = self.endpoint(&format!("{COMMENTS_PATH}/{id}"))?;
        self.dispatch(self.http.put(url).json(draft), RequestOptions::default())
            .await
    }

    pub async fn delete_comment(&self, id: u64) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{COMMENTS_PATH}/{id}"))?;
        self.dispatch(self.http.delete(url), RequestOptions::default())
            .await
    }

    pub async fn batch_delete_comments(&self, ids: &[u64]) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{COMMENTS_PATH}/batch"))?;
        self.dispatch(
            self.http.delete(url).json(&json!({ "ids": ids })),
            RequestOptions::default(),
        )
        .await
    }

    /// Approve or reject a pending comment.
    pub async fn review_comment(
        &self,
        id: u64,
        decision: ReviewDecision,
    ) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{COMMENTS_PATH}/{id}/review"))?;
        self.dispatch(
            self.http.post(url).json(&json!({ "status": decision })),
            RequestOptions::default(),
        )
        .await
    }
}
