//! Hotel Errors

use tracing::error;

use hotel_app::domain::hotels::HotelsServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: HotelsServiceError) -> ApiError {
    match error {
        HotelsServiceError::NotFound => ApiError::not_found("hotel not found"),
        HotelsServiceError::Invalid(source) => ApiError::bad_request(source.to_string()),
        HotelsServiceError::Storage(source) => {
            error!("hotel storage failure: {source}");

            ApiError::internal()
        }
    }
}
