//! Business workflows shared by the HTML and JSON routes.

use thiserror::Error;

use crate::repository::errors::RepositoryError;

pub mod api;
pub mod owner;

/// Errors surfaced by the service layer to the HTTP boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("resource not found")]
    NotFound,

    #[error("form error: {0}")]
    Form(String),

    /// Storage failure; fatal for the current request.
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
