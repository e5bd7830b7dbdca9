//! Auth Errors

use tracing::{debug, error};

use hotel_app::auth::AuthServiceError;

use crate::errors::ApiError;

pub(crate) fn into_api_error(error: AuthServiceError) -> ApiError {
    match error {
        AuthServiceError::InvalidCredentials => ApiError::bad_request("invalid credentials"),
        AuthServiceError::Token(source) => {
            debug!("rejected access token: {source}");

            ApiError::unauthorized()
        }
        AuthServiceError::UnknownUser => {
            debug!("access token refers to an unknown user");

            ApiError::unauthorized()
        }
        AuthServiceError::Password(source) => {
            error!("failed to verify password: {source}");

            ApiError::internal()
        }
        AuthServiceError::Storage(source) => {
            error!("failed to load user for authentication: {source}");

            ApiError::internal()
        }
    }
}
