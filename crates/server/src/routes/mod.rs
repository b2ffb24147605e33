//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health        - Liveness check
//! GET  /health/ready  - Readiness check (pings the database)
//!
//! # Auth
//! GET  /login         - Login page
//! POST /login         - Login action (form fields: user, psw)
//!
//! # Enquiries
//! GET  /enquiries     - Enquiry listing (requires admin session)
//! POST /submit-form   - Enquiry form submission (21 named fields)
//! GET  /success       - Thank-you page after a confirmed submission
//! ```

pub mod auth;
pub mod enquiries;
pub mod submit;

use axum::{
    Router,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the application.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/enquiries", get(enquiries::list))
        .route("/submit-form", post(submit::submit))
        .route("/success", get(submit::success_page))
}

/// Plain 302 Found redirect.
pub(crate) fn found(location: &'static str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location)]).into_response()
}
