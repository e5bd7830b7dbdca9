//! Database Config

use clap::Args;

/// Reservation store settings.
#[derive(Debug, Args)]
pub struct DatabaseConfig {
    /// `PostgreSQL` connection string for the reservation store
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: String,
}
