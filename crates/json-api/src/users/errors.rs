//! User Errors

use tracing::error;

use hotel_app::domain::users::UsersServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: UsersServiceError) -> ApiError {
    match error {
        UsersServiceError::NotFound => ApiError::not_found("user not found"),
        UsersServiceError::Unauthorized => ApiError::unauthorized(),
        error @ (UsersServiceError::EmailTaken | UsersServiceError::Invalid(_)) => {
            ApiError::bad_request(error.to_string())
        }
        UsersServiceError::Password(source) => {
            error!("failed to hash password: {source}");

            ApiError::internal()
        }
        UsersServiceError::Storage(source) => {
            error!("user storage failure: {source}");

            ApiError::internal()
        }
    }
}
