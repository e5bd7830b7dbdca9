//! Bookings service errors.

use thiserror::Error;

use crate::{database::RepositoryError, domain::bookings::data::BookingValidationError};

#[derive(Debug, Error)]
pub enum BookingsServiceError {
    #[error("booking not found")]
    NotFound,

    #[error("room not found")]
    RoomNotFound,

    #[error("unauthorized")]
    Unauthorized,

    #[error("room already booked")]
    AlreadyBooked,

    #[error(transparent)]
    Invalid(#[from] BookingValidationError),

    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for BookingsServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::InvalidReference => Self::RoomNotFound,
            error => Self::Storage(error),
        }
    }
}
