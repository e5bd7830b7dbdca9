//! Rooms service errors.

use thiserror::Error;

use crate::{database::RepositoryError, domain::rooms::data::RoomValidationError};

#[derive(Debug, Error)]
pub enum RoomsServiceError {
    #[error("room not found")]
    NotFound,

    #[error("hotel not found")]
    HotelNotFound,

    #[error(transparent)]
    Invalid(#[from] RoomValidationError),

    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for RoomsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::InvalidReference => Self::HotelNotFound,
            error => Self::Storage(error),
        }
    }
}
