//! Database operations.
//!
//! # Tables
//!
//! - `enquiries` - One row per submitted enquiry form
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and applied
//! explicitly with:
//! ```bash
//! sqlx migrate run --source crates/server/migrations
//! ```

pub mod enquiries;

use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use enquiries::EnquiryRepository;

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),
}

/// Create a `PostgreSQL` connection pool.
///
/// The pool connects lazily: nothing is dialed here, so an unreachable
/// database only shows up when a query runs. There is no reconnect or
/// backoff logic beyond what the pool itself provides.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection URL cannot be parsed.
pub fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect_lazy(database_url.expose_secret())
}
