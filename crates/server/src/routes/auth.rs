//! Authentication route handlers.
//!
//! The application has a single admin identity configured at startup;
//! login compares the submitted pair against it and stores a session
//! marker on success. There is no registration and no logout route.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::middleware::set_current_admin;
use crate::models::CurrentAdmin;
use crate::state::AppState;

/// Login form data. Field names match the login page inputs.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub user: String,
    pub psw: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
pub struct LoginTemplate;

/// Fragment shown on a failed login attempt.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login_failed.html")]
pub struct LoginFailedTemplate;

/// Display the login page.
pub async fn login_page() -> impl IntoResponse {
    LoginTemplate
}

/// Handle login form submission.
///
/// The failure response does not reveal which of the two fields was wrong.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Response {
    if !state.config().admin.matches(&form.user, &form.psw) {
        tracing::warn!("Failed admin login attempt");
        return (StatusCode::UNAUTHORIZED, LoginFailedTemplate).into_response();
    }

    let admin = CurrentAdmin {
        username: form.user,
    };
    if let Err(e) = set_current_admin(&session, &admin).await {
        tracing::error!("Failed to set session: {e}");
        return (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response();
    }

    tracing::info!(username = %admin.username, "Admin logged in");
    super::found("/enquiries")
}
