//! Hotels service errors.

use thiserror::Error;

use crate::{database::RepositoryError, domain::hotels::data::HotelValidationError};

#[derive(Debug, Error)]
pub enum HotelsServiceError {
    #[error("hotel not found")]
    NotFound,

    #[error(transparent)]
    Invalid(#[from] HotelValidationError),

    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for HotelsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            error => Self::Storage(error),
        }
    }
}
