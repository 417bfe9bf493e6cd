use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Entity not found")]
    NotFound,

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Directory service returned {status}: {message}")]
    Api { status: StatusCode, message: String },

    #[error("Malformed response: {0}")]
    Parse(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
