//! Room Errors

use tracing::error;

use hotel_app::domain::rooms::RoomsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: RoomsServiceError) -> ApiError {
    match error {
        RoomsServiceError::NotFound => ApiError::not_found("room not found"),
        RoomsServiceError::HotelNotFound => ApiError::not_found("hotel not found"),
        RoomsServiceError::Invalid(source) => ApiError::bad_request(source.to_string()),
        RoomsServiceError::Storage(source) => {
            error!("room storage failure: {source}");

            ApiError::internal()
        }
    }
}
