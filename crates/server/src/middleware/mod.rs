//! Middleware and request extractors.

pub mod auth;
pub mod session;

pub use auth::{RequireAdminAuth, set_current_admin};
pub use session::{SESSION_COOKIE_NAME, create_session_layer};
