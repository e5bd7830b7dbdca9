//! Users service errors.

use thiserror::Error;

use crate::{
    auth::PasswordError, database::RepositoryError, domain::users::data::UserValidationError,
};

#[derive(Debug, Error)]
pub enum UsersServiceError {
    #[error("user not found")]
    NotFound,

    #[error("email is already registered")]
    EmailTaken,

    #[error("unauthorized")]
    Unauthorized,

    #[error(transparent)]
    Invalid(#[from] UserValidationError),

    #[error("failed to hash password")]
    Password(#[from] PasswordError),

    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for UsersServiceError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::AlreadyExists => Self::EmailTaken,
            error => Self::Storage(error),
        }
    }
}
