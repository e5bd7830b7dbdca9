//! Auth service errors.

use thiserror::Error;

use crate::{
    auth::{PasswordError, TokenError},
    database::RepositoryError,
};

#[derive(Debug, Error)]
pub enum AuthServiceError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid token")]
    Token(#[source] TokenError),

    #[error("token refers to an unknown user")]
    UnknownUser,

    #[error("password verification error")]
    Password(#[from] PasswordError),

    #[error("storage error")]
    Storage(#[source] RepositoryError),
}

impl From<RepositoryError> for AuthServiceError {
    fn from(error: RepositoryError) -> Self {
        Self::Storage(error)
    }
}

impl From<TokenError> for AuthServiceError {
    fn from(error: TokenError) -> Self {
        Self::Token(error)
    }
}
