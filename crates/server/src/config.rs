//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `DB_HOST` - `PostgreSQL` host (or set `DATABASE_URL` instead)
//! - `DB_USER` - `PostgreSQL` user
//! - `DB_PASSWORD` - `PostgreSQL` password
//! - `DB_NAME` - `PostgreSQL` database name
//! - `SESSION_SECRET` - Session secret (min 32 chars, high entropy)
//! - `ADMIN_USERNAME` - Admin login username
//! - `ADMIN_PASSWORD` - Admin login password
//! - `SMTP_USERNAME` - SMTP authentication username
//! - `SMTP_PASSWORD` - SMTP authentication password
//!
//! ## Optional
//! - `DATABASE_URL` - Full connection string, overrides the `DB_*` variables
//! - `DB_PORT` - `PostgreSQL` port (default: 5432)
//! - `HOST` - Bind address (default: 127.0.0.1)
//! - `PORT` - Listen port (default: 3000)
//! - `BASE_URL` - Public base URL (default: http://<HOST>:<PORT>)
//! - `SMTP_HOST` - SMTP server hostname (default: smtp.gmail.com)
//! - `SMTP_PORT` - SMTP port (default: 587)
//! - `SMTP_FROM` - Email sender address (default: `SMTP_USERNAME`)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` / `SENTRY_TRACES_SAMPLE_RATE` - Sample rates

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

const MIN_SESSION_SECRET_LENGTH: usize = 32;
const MIN_ENTROPY_BITS_PER_CHAR: f64 = 3.3;

/// Blocklist of common placeholder patterns (case-insensitive)
const PLACEHOLDER_PATTERNS: &[&str] = &[
    "your-",
    "changeme",
    "replace",
    "placeholder",
    "example",
    "secret",
    "password",
    "xxx",
    "todo",
    "fixme",
    "insert",
    "enter-",
    "put-your",
    "add-your",
];

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("Insecure secret in {0}: {1}")]
    InsecureSecret(String, String),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// `PostgreSQL` connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the application
    pub base_url: String,
    /// Session secret
    pub session_secret: SecretString,
    /// Admin login credentials
    pub admin: AdminCredentials,
    /// Email configuration
    pub email: EmailConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment (e.g., "development", "staging", "production")
    pub sentry_environment: Option<String>,
    /// Sentry error sample rate (0.0 to 1.0)
    pub sentry_sample_rate: f32,
    /// Sentry traces sample rate for performance monitoring (0.0 to 1.0)
    pub sentry_traces_sample_rate: f32,
}

/// The single admin identity, loaded once at startup.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct AdminCredentials {
    /// Admin login username
    pub username: String,
    /// Admin login password, compared verbatim against login input
    pub password: SecretString,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl AdminCredentials {
    /// Exact, case-sensitive comparison of a submitted credential pair.
    #[must_use]
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password.expose_secret() == password
    }
}

/// Email (SMTP) configuration.
///
/// Implements `Debug` manually to redact the password.
#[derive(Clone)]
pub struct EmailConfig {
    /// SMTP server hostname
    pub smtp_host: String,
    /// SMTP server port
    pub smtp_port: u16,
    /// SMTP authentication username
    pub smtp_username: String,
    /// SMTP authentication password
    pub smtp_password: SecretString,
    /// Email sender address (From header)
    pub from_address: String,
}

impl std::fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailConfig")
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &"[REDACTED]")
            .field("from_address", &self.from_address)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing, invalid, or
    /// if secrets fail validation (placeholder detection, entropy check).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url()?;
        let host = get_env_or_default("HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORT".to_string(), e.to_string()))?;
        let base_url = get_optional_env("BASE_URL").unwrap_or_else(|| format!("http://{host}:{port}"));
        let session_secret = get_validated_secret("SESSION_SECRET")?;
        validate_session_secret(&session_secret, "SESSION_SECRET")?;

        let admin = AdminCredentials::from_env()?;
        let email = EmailConfig::from_env()?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(1.0);

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            session_secret,
            admin,
            email,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl AdminCredentials {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            username: get_required_env("ADMIN_USERNAME")?,
            password: get_required_secret("ADMIN_PASSWORD")?,
        })
    }
}

impl EmailConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let smtp_port = get_env_or_default("SMTP_PORT", "587")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("SMTP_PORT".to_string(), e.to_string()))?;
        let smtp_username = get_required_env("SMTP_USERNAME")?;
        let from_address =
            get_optional_env("SMTP_FROM").unwrap_or_else(|| smtp_username.clone());

        Ok(Self {
            smtp_host: get_env_or_default("SMTP_HOST", "smtp.gmail.com"),
            smtp_port,
            smtp_username,
            smtp_password: get_required_secret("SMTP_PASSWORD")?,
            from_address,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get a required environment variable as a secret.
fn get_required_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    Ok(SecretString::from(value))
}

/// Resolve the database connection URL.
///
/// `DATABASE_URL` wins when set; otherwise the URL is composed from the
/// individual `DB_*` variables.
fn get_database_url() -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }

    let host = get_required_env("DB_HOST")?;
    let port = get_env_or_default("DB_PORT", "5432")
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar("DB_PORT".to_string(), e.to_string()))?;
    let user = get_required_env("DB_USER")?;
    let password = get_required_env("DB_PASSWORD")?;
    let database = get_required_env("DB_NAME")?;

    Ok(SecretString::from(compose_database_url(
        &host, port, &user, &password, &database,
    )))
}

/// Compose a `PostgreSQL` connection URL from its parts.
fn compose_database_url(host: &str, port: u16, user: &str, password: &str, database: &str) -> String {
    format!("postgres://{user}:{password}@{host}:{port}/{database}")
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Validate that a session secret meets minimum length requirements.
fn validate_session_secret(secret: &SecretString, var_name: &str) -> Result<(), ConfigError> {
    let value = secret.expose_secret();
    if value.len() < MIN_SESSION_SECRET_LENGTH {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "must be at least {} characters (got {})",
                MIN_SESSION_SECRET_LENGTH,
                value.len()
            ),
        ));
    }
    Ok(())
}

/// Calculate Shannon entropy in bits per character.
fn shannon_entropy(s: &str) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let mut freq: HashMap<char, usize> = HashMap::new();
    for c in s.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }

    #[allow(clippy::cast_precision_loss)] // String length will never exceed f64 precision
    let len = s.len() as f64;
    freq.values()
        .map(|&count| {
            #[allow(clippy::cast_precision_loss)] // Character count will never exceed f64 precision
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Validate that a secret is not a placeholder and has sufficient entropy.
fn validate_secret_strength(secret: &str, var_name: &str) -> Result<(), ConfigError> {
    let lower = secret.to_lowercase();

    // Check blocklist
    for pattern in PLACEHOLDER_PATTERNS {
        if lower.contains(pattern) {
            return Err(ConfigError::InsecureSecret(
                var_name.to_string(),
                format!("appears to be a placeholder (contains '{pattern}')"),
            ));
        }
    }

    // Check entropy (real secrets have high entropy)
    let entropy = shannon_entropy(secret);
    if entropy < MIN_ENTROPY_BITS_PER_CHAR {
        return Err(ConfigError::InsecureSecret(
            var_name.to_string(),
            format!(
                "entropy too low ({entropy:.2} bits/char, need >= {MIN_ENTROPY_BITS_PER_CHAR:.1}). Use a randomly generated secret."
            ),
        ));
    }

    Ok(())
}

/// Load and validate a secret from environment.
fn get_validated_secret(key: &str) -> Result<SecretString, ConfigError> {
    let value = get_required_env(key)?;
    validate_secret_strength(&value, key)?;
    Ok(SecretString::from(value))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_shannon_entropy_empty() {
        assert!((shannon_entropy("") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_single_char() {
        // All same character = 0 entropy
        assert!((shannon_entropy("aaaaaaa") - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_shannon_entropy_two_chars() {
        // "ab" has entropy of 1 bit per char (50% a, 50% b)
        let entropy = shannon_entropy("ab");
        assert!((entropy - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_validate_secret_strength_placeholder() {
        let result = validate_secret_strength("your-session-key-here", "TEST_VAR");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(matches!(err, ConfigError::InsecureSecret(_, _)));
    }

    #[test]
    fn test_validate_secret_strength_low_entropy() {
        let result = validate_secret_strength("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa", "TEST_VAR");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_secret_strength_valid() {
        // High-entropy random string
        let result = validate_secret_strength("aB3$xY9!mK2@nL5#pQ7&rT0*uW4^zC6", "TEST_VAR");
        assert!(result.is_ok());
    }

    #[test]
    fn test_validate_session_secret_too_short() {
        let secret = SecretString::from("short");
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_err());
    }

    #[test]
    fn test_validate_session_secret_valid_length() {
        let secret = SecretString::from("a".repeat(32));
        let result = validate_session_secret(&secret, "TEST_SESSION");
        assert!(result.is_ok());
    }

    #[test]
    fn test_compose_database_url() {
        let url = compose_database_url("localhost", 5432, "enquiry", "pw", "enquiries");
        assert_eq!(url, "postgres://enquiry:pw@localhost:5432/enquiries");
    }

    #[test]
    fn test_admin_credentials_matches_exactly() {
        let admin = AdminCredentials {
            username: "admin".to_string(),
            password: SecretString::from("hunter2"),
        };

        assert!(admin.matches("admin", "hunter2"));
        assert!(!admin.matches("admin", "Hunter2")); // case-sensitive
        assert!(!admin.matches("Admin", "hunter2"));
        assert!(!admin.matches("admin", ""));
        assert!(!admin.matches("", ""));
    }

    #[test]
    fn test_admin_credentials_debug_redacts_password() {
        let admin = AdminCredentials {
            username: "admin".to_string(),
            password: SecretString::from("super_secret_admin_password"),
        };

        let debug_output = format!("{admin:?}");
        assert!(debug_output.contains("admin"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_admin_password"));
    }

    #[test]
    fn test_email_config_debug_redacts_secrets() {
        let config = EmailConfig {
            smtp_host: "smtp.gmail.com".to_string(),
            smtp_port: 587,
            smtp_username: "enquiries@example.com".to_string(),
            smtp_password: SecretString::from("super_secret_smtp_password"),
            from_address: "noreply@example.com".to_string(),
        };

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("smtp.gmail.com"));
        assert!(debug_output.contains("587"));
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_smtp_password"));
    }

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            database_url: SecretString::from("postgres://localhost/test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "http://127.0.0.1:3000".to_string(),
            session_secret: SecretString::from("x".repeat(32)),
            admin: AdminCredentials {
                username: "admin".to_string(),
                password: SecretString::from("hunter2"),
            },
            email: EmailConfig {
                smtp_host: "smtp.gmail.com".to_string(),
                smtp_port: 587,
                smtp_username: "user".to_string(),
                smtp_password: SecretString::from("pass"),
                from_address: "enquiries@example.com".to_string(),
            },
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }
}
