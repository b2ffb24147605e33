//! Application state shared across handlers.

use std::sync::Arc;

use lettre::transport::smtp::Error as SmtpError;
use sqlx::PgPool;

use crate::config::AppConfig;
use crate::services::EmailService;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the database pool, configuration, and mailer.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AppConfig,
    pool: PgPool,
    mailer: EmailService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP transport cannot be constructed from
    /// the configured relay host.
    pub fn new(config: AppConfig, pool: PgPool) -> Result<Self, SmtpError> {
        let mailer = EmailService::new(&config.email)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                mailer,
            }),
        })
    }

    /// Get a reference to the application configuration.
    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Get a reference to the email service.
    #[must_use]
    pub fn mailer(&self) -> &EmailService {
        &self.inner.mailer
    }
}
