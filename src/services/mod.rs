//! Service layer orchestrating the band repository for the route handlers.

use thiserror::Error;

use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod api;
pub mod band;
pub mod main;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The requested record does not exist.
    #[error("not found")]
    NotFound,

    /// The submitted form was rejected; the message is shown to the user.
    #[error("{0}")]
    Form(String),

    /// The band directory service could not fulfil the request.
    #[error("repository error: {0}")]
    Repository(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            other => ServiceError::Repository(other),
        }
    }
}

impl From<FormError> for ServiceError {
    fn from(err: FormError) -> Self {
        ServiceError::Form(err.to_string())
    }
}
