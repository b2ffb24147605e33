//! Session middleware configuration.
//!
//! Sets up in-memory cookie sessions using tower-sessions. Sessions hold
//! only the logged-in admin marker and are ephemeral: a restart clears
//! them, and inactivity past the expiry window invalidates the cookie.

use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};

use crate::config::AppConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "enquiry_admin_session";

/// Session expiry time in seconds (24 hours, renewed on activity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Create the session layer with an in-memory store.
#[must_use]
pub fn create_session_layer(config: &AppConfig) -> SessionManagerLayer<MemoryStore> {
    let store = MemoryStore::default();

    // Determine if we're in production (HTTPS)
    let is_secure = config.base_url.starts_with("https://");

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(is_secure)
        .with_same_site(tower_sessions::cookie::SameSite::Strict)
        .with_http_only(true)
        .with_path("/")
}
