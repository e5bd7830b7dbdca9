//! Booking Errors

use tracing::error;

use hotel_app::domain::bookings::BookingsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: BookingsServiceError) -> ApiError {
    match error {
        BookingsServiceError::NotFound => ApiError::not_found("booking not found"),
        BookingsServiceError::RoomNotFound => ApiError::not_found("room not found"),
        BookingsServiceError::Unauthorized => ApiError::unauthorized(),
        error @ (BookingsServiceError::AlreadyBooked | BookingsServiceError::Invalid(_)) => {
            ApiError::bad_request(error.to_string())
        }
        BookingsServiceError::Storage(source) => {
            error!("booking storage failure: {source}");

            ApiError::internal()
        }
    }
}
