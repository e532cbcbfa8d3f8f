use crate::errors::repository::RepositoryError;
use crate::utils::validation_messages;
use bcrypt::BcryptError;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("{0}")]
    AlreadyExists(String),

    #[error("{0}")]
    InvalidCredentials(String),

    #[error("{0}")]
    InsufficientStock(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Bcrypt error: {0}")]
    Bcrypt(#[from] BcryptError),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<ValidationErrors> for ServiceError {
    fn from(errors: ValidationErrors) -> Self {
        ServiceError::Validation(validation_messages(&errors))
    }
}
