//! Auth service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::debug;

use crate::{
    auth::{AccessTokens, AuthServiceError, Authenticated, Credentials, verify_password},
    database::RepositoryError,
    domain::users::{
        records::UserRecord,
        repository::{PgUsersRepository, UsersRepository},
    },
};

#[derive(Clone)]
pub struct AuthManager {
    users: Arc<dyn UsersRepository>,
    tokens: AccessTokens,
}

impl std::fmt::Debug for AuthManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthManager")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl AuthManager {
    #[must_use]
    pub fn new(pool: PgPool, tokens: AccessTokens) -> Self {
        Self::with_repository(Arc::new(PgUsersRepository::new(pool)), tokens)
    }

    #[must_use]
    pub(crate) fn with_repository(users: Arc<dyn UsersRepository>, tokens: AccessTokens) -> Self {
        Self { users, tokens }
    }

    /// Issue a fresh access token for the user registered under `email`.
    ///
    /// # Errors
    ///
    /// Returns [`AuthServiceError::UnknownUser`] if no such user exists.
    pub async fn issue_token(&self, email: &str) -> Result<String, AuthServiceError> {
        let user = self
            .users
            .find_user_by_email(email)
            .await
            .map_err(|error| match error {
                RepositoryError::NotFound => AuthServiceError::UnknownUser,
                error => AuthServiceError::Storage(error),
            })?;

        Ok(self.tokens.issue(&user)?)
    }
}

#[async_trait]
impl AuthService for AuthManager {
    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<Authenticated, AuthServiceError> {
        let user = match self.users.find_user_by_email(&credentials.email).await {
            Ok(user) => user,
            Err(RepositoryError::NotFound) => {
                debug!(email = %credentials.email, "login for unknown email");

                return Err(AuthServiceError::InvalidCredentials);
            }
            Err(error) => return Err(AuthServiceError::Storage(error)),
        };

        if !verify_password(&credentials.password, &user.encrypted_password)? {
            debug!(user = %user.uuid, "login with wrong password");

            return Err(AuthServiceError::InvalidCredentials);
        }

        let token = self.tokens.issue(&user)?;

        Ok(Authenticated { user, token })
    }

    async fn authenticate_token(&self, token: &str) -> Result<UserRecord, AuthServiceError> {
        let user_uuid = self.tokens.verify(token)?;

        self.users
            .get_user(user_uuid)
            .await
            .map_err(|error| match error {
                RepositoryError::NotFound => AuthServiceError::UnknownUser,
                error => AuthServiceError::Storage(error),
            })
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check an email/password pair and issue an access token.
    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<Authenticated, AuthServiceError>;

    /// Verify an access token and resolve the user it was issued to.
    async fn authenticate_token(&self, token: &str) -> Result<UserRecord, AuthServiceError>;
}
