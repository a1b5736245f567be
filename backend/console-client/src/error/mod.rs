pub mod config;
pub mod credential;
pub mod logger;
pub mod request;

pub use credential::{CredentialError, TokenRejection};
pub use request::RequestError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Request(#[from] request::RequestError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Credential(#[from] credential::CredentialError),

    #[error(transparent)]
    Logger(#[from] logger::LoggerError),
}
