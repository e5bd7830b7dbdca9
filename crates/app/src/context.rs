//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    auth::{AccessTokens, AuthManager, AuthService},
    database,
    domain::{
        bookings::{BookingsManager, BookingsService},
        hotels::{HotelsManager, HotelsService},
        rooms::{RoomsManager, RoomsService},
        users::{UsersManager, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),

    #[error("failed to apply database migrations")]
    Migrations(#[source] sqlx::migrate::MigrateError),
}

#[derive(Clone)]
pub struct AppContext {
    pub auth: Arc<dyn AuthService>,
    pub users: Arc<dyn UsersService>,
    pub hotels: Arc<dyn HotelsService>,
    pub rooms: Arc<dyn RoomsService>,
    pub bookings: Arc<dyn BookingsService>,
}

impl AppContext {
    /// Build application context from a database URL, applying pending migrations.
    ///
    /// # Errors
    ///
    /// Returns an error when connecting to the database or migrating it fails.
    pub async fn from_database_url(url: &str, tokens: AccessTokens) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        database::migrate(&pool)
            .await
            .map_err(AppInitError::Migrations)?;

        Ok(Self {
            auth: Arc::new(AuthManager::new(pool.clone(), tokens)),
            users: Arc::new(UsersManager::new(pool.clone())),
            hotels: Arc::new(HotelsManager::new(pool.clone())),
            rooms: Arc::new(RoomsManager::new(pool.clone())),
            bookings: Arc::new(BookingsManager::new(pool)),
        })
    }
}
