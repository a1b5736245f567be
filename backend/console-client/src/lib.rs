pub mod classify;
pub mod client;
pub mod config;
pub mod credential;
pub mod envelope;
pub mod error;
pub mod extract;
pub mod logger;
pub mod notify;
pub mod services;

#[cfg(test)]
mod tests;

pub use client::{ConsoleClient, RequestOptions};

pub const ADMIN_SERVER_HOSTNAME: &str = "127.0.0.1";
pub const ADMIN_SERVER_PORT: u16 = 8000;
pub const ADMIN_SERVER_BASE_URL: &str = const_format::concatcp!(
    "http://",
    ADMIN_SERVER_HOSTNAME,
    ":",
    ADMIN_SERVER_PORT
);
