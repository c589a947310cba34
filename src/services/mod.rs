//! Application services composing queries against the listing backend.

use thiserror::Error;

use crate::pagination::PaginationError;
use crate::repository::errors::RepositoryError;

pub mod home;
pub mod listing;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Pagination(#[from] PaginationError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
