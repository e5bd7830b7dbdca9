//! Users Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as};

use crate::{
    database::{RepositoryError, page_bounds},
    domain::users::{
        data::{NewUserRecord, UserFilter, UserUpdate},
        records::{UserRecord, UserUuid},
    },
    pagination::Pagination,
};

const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const FIND_USER_BY_EMAIL_SQL: &str = include_str!("sql/find_user_by_email.sql");
const LIST_USERS_SQL: &str = include_str!("sql/list_users.sql");
const UPDATE_USER_SQL: &str = include_str!("sql/update_user.sql");
const DELETE_USER_SQL: &str = include_str!("sql/delete_user.sql");

#[derive(Debug, Clone)]
pub(crate) struct PgUsersRepository {
    pool: PgPool,
}

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: UserUuid::from_uuid(row.try_get("uuid")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            email: row.try_get("email")?,
            encrypted_password: row.try_get("encrypted_password")?,
            is_admin: row.try_get("is_admin")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn create_user(&self, user: NewUserRecord) -> Result<UserRecord, RepositoryError> {
        query_as::<Postgres, UserRecord>(CREATE_USER_SQL)
            .bind(user.uuid.into_uuid())
            .bind(user.first_name)
            .bind(user.last_name)
            .bind(user.email)
            .bind(user.encrypted_password)
            .bind(user.is_admin)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, RepositoryError> {
        query_as::<Postgres, UserRecord>(GET_USER_SQL)
            .bind(user.into_uuid())
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<UserRecord, RepositoryError> {
        query_as::<Postgres, UserRecord>(FIND_USER_BY_EMAIL_SQL)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn list_users(
        &self,
        filter: UserFilter,
        pagination: Pagination,
    ) -> Result<Vec<UserRecord>, RepositoryError> {
        let (limit, offset) = page_bounds(pagination);

        query_as::<Postgres, UserRecord>(LIST_USERS_SQL)
            .bind(filter.first_name)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn update_user(
        &self,
        user: UserUuid,
        update: UserUpdate,
    ) -> Result<UserRecord, RepositoryError> {
        query_as::<Postgres, UserRecord>(UPDATE_USER_SQL)
            .bind(user.into_uuid())
            .bind(update.first_name)
            .bind(update.last_name)
            .fetch_one(&self.pool)
            .await
            .map_err(Into::into)
    }

    async fn delete_user(&self, user: UserUuid) -> Result<(), RepositoryError> {
        let rows_affected = query(DELETE_USER_SQL)
            .bind(user.into_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        if rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[automock]
#[async_trait]
pub(crate) trait UsersRepository: Send + Sync {
    async fn create_user(&self, user: NewUserRecord) -> Result<UserRecord, RepositoryError>;

    /// Fetch a user that has not been deleted.
    async fn get_user(&self, user: UserUuid) -> Result<UserRecord, RepositoryError>;

    /// Case-insensitive lookup by email.
    async fn find_user_by_email(&self, email: &str) -> Result<UserRecord, RepositoryError>;

    async fn list_users(
        &self,
        filter: UserFilter,
        pagination: Pagination,
    ) -> Result<Vec<UserRecord>, RepositoryError>;

    async fn update_user(
        &self,
        user: UserUuid,
        update: UserUpdate,
    ) -> Result<UserRecord, RepositoryError>;

    /// Soft-delete a user so their bookings keep a valid owner.
    async fn delete_user(&self, user: UserUuid) -> Result<(), RepositoryError>;
}
