//! Dashboard statistics endpoints.

use crate::client::{ConsoleClient, RequestOptions};
use crate::error::request::RequestError;

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STATISTICS_PATH: &str = "/api/statistics";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCounters {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    pub new_today: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentCounters {
    pub total: u64,
    pub pending: u64,
    pub approved: u64,
    pub rejected: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisitCounters {
    pub total: u64,
    pub today: u64,
    pub yesterday: u64,
    pub average: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageCounters {
    pub used: u64,
    pub total: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatusInfo {
    pub uptime: String,
    pub version: String,
    pub last_backup: String,
}

/// Aggregate counters for the dashboard landing page.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsData {
    pub users: UserCounters,
    pub comments: CommentCounters,
    pub visits: VisitCounters,
    pub storage: StorageCounters,
    pub system_status: SystemStatusInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ActivityLog {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: String,
    pub user: String,
    pub action: String,
    pub target: Option<String>,
    pub time: String,
    pub ip: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ActivityParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitStatsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ConsoleClient {
    pub async fn system_statistics(&self) -> Result<StatisticsData, RequestError> {
        let url = self.endpoint(STATISTICS_PATH)?;
        self.dispatch(self.http.get(url), RequestOptions::default())
            .await
    }

    pub async fn user_statistics(&self) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{STATISTICS_PATH}/users"))?;
        self.dispatch(self.http.get(url), RequestOptions::default())
            .await
    }

    pub async fn comment_statistics(&self) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{STATISTICS_PATH}/comments"))?;
        self.dispatch(self.http.get(url), RequestOptions::default())
            .await
    }

    pub async fn recent_activities(
        &self,
        params: &ActivityParams,
    ) -> Result<Vec<ActivityLog>, RequestError> {
        let url = self.endpoint(&format!("{STATISTICS_PATH}/activities"))?;
        self.dispatch(self.http.get(url).query(params), RequestOptions::default())
            .await
    }

    pub async fn visit_statistics(
        &self,
        params: &VisitStatsParams,
    ) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{STATISTICS_PATH}/visits"))?;
        self.dispatch(self.http.get(url).query(params), RequestOptions::default())
            .await
    }

    pub async fn storage_statistics(&self) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{STATISTICS_PATH}/storage"))?;
        self.dispatch(self.http.get(url), RequestOptions::default())
            .await
    }

    pub async fn system_status(&self) -> Result<Value, RequestError> {
        let url = self.endpoint(&format!("{STATISTICS_PATH}/system-status"))?;
        self.dispatch(self.http.get(url), RequestOptions::default())
            .await
    }
}
