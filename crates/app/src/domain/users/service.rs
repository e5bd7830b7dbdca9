//! Users service.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::info;

use crate::{
    auth::{Caller, hash_password, policy},
    domain::users::{
        data::{NewUser, NewUserRecord, UserFilter, UserUpdate},
        errors::UsersServiceError,
        records::{UserRecord, UserUuid},
        repository::{PgUsersRepository, UsersRepository},
    },
    pagination::Pagination,
};

#[derive(Clone)]
pub struct UsersManager {
    repository: Arc<dyn UsersRepository>,
}

impl std::fmt::Debug for UsersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UsersManager").finish_non_exhaustive()
    }
}

impl UsersManager {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self::with_repository(Arc::new(PgUsersRepository::new(pool)))
    }

    #[must_use]
    pub(crate) fn with_repository(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UsersService for UsersManager {
    async fn register_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError> {
        user.validate()?;

        let encrypted_password = hash_password(&user.password)?;

        let created = self
            .repository
            .create_user(NewUserRecord {
                uuid: UserUuid::new(),
                first_name: user.first_name,
                last_name: user.last_name,
                email: user.email,
                encrypted_password,
                is_admin: user.is_admin,
            })
            .await?;

        info!(user = %created.uuid, is_admin = created.is_admin, "user.registered");

        Ok(created)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError> {
        Ok(self.repository.get_user(user).await?)
    }

    async fn list_users(
        &self,
        filter: UserFilter,
        pagination: Pagination,
    ) -> Result<Vec<UserRecord>, UsersServiceError> {
        Ok(self.repository.list_users(filter, pagination).await?)
    }

    async fn update_user(
        &self,
        caller: Caller,
        user: UserUuid,
        update: UserUpdate,
    ) -> Result<UserRecord, UsersServiceError> {
        if !policy::can_manage_user(caller, user) {
            return Err(UsersServiceError::Unauthorized);
        }

        let update = update.normalized();

        update.validate()?;

        Ok(self.repository.update_user(user, update).await?)
    }

    async fn delete_user(&self, caller: Caller, user: UserUuid) -> Result<(), UsersServiceError> {
        if !policy::can_manage_user(caller, user) {
            return Err(UsersServiceError::Unauthorized);
        }

        self.repository.delete_user(user).await?;

        info!(user = %user, deleted_by = %caller.uuid, "user.deleted");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait UsersService: Send + Sync {
    /// Validate, hash the password and store a new user.
    async fn register_user(&self, user: NewUser) -> Result<UserRecord, UsersServiceError>;

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, UsersServiceError>;

    async fn list_users(
        &self,
        filter: UserFilter,
        pagination: Pagination,
    ) -> Result<Vec<UserRecord>, UsersServiceError>;

    /// Change a user's name fields. Requires the caller to be that user or an admin.
    async fn update_user(
        &self,
        caller: Caller,
        user: UserUuid,
        update: UserUpdate,
    ) -> Result<UserRecord, UsersServiceError>;

    /// Soft-delete a user. Requires the caller to be that user or an admin.
    async fn delete_user(&self, caller: Caller, user: UserUuid) -> Result<(), UsersServiceError>;
}
