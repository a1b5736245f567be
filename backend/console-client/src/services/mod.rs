//! Typed wrappers over the admin console REST API.
//!
//! Each submodule pairs the endpoint methods (implemented on
//! [`ConsoleClient`](crate::client::ConsoleClient)) with the request
//! and response shapes the backend speaks. Query parameters serialize
//! camelCase to match the wire contract; entity fields stay
//! snake_case as the backend emits them.

pub mod auth;
pub mod comments;
pub mod statistics;
pub mod users;

use serde::{Deserialize, Serialize};

/// Pagination metadata returned by list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// A page of items plus its metadata.
#[derive(Debug, Clone, Deserialize)]
pub struct ListResult<T> {
    pub items: Vec<T>,
    pub meta: PageMeta,
}

/// Sort direction for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}
