//! Enquiry form submission route handlers.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::db::EnquiryRepository;
use crate::models::{EnquiryForm, NewEnquiry};
use crate::services::{SubmissionOutcome, submit_enquiry};
use crate::state::AppState;

/// Static thank-you page shown after a fully confirmed submission.
#[derive(Template, WebTemplate)]
#[template(path = "success.html")]
pub struct SuccessTemplate;

/// Display the thank-you page.
pub async fn success_page() -> impl IntoResponse {
    SuccessTemplate
}

/// Handle an enquiry form submission.
///
/// Exactly one response is produced from the combined outcome:
/// - validation failure: 400 with the reason
/// - insert failure: 500, and no email is attempted
/// - insert and email both succeeded: redirect to `/success`
/// - insert succeeded, email failed: plain-text notice (the enquiry is kept)
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<EnquiryForm>,
) -> Response {
    let enquiry = match NewEnquiry::try_from(form) {
        Ok(enquiry) => enquiry,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected enquiry submission");
            return (StatusCode::BAD_REQUEST, e.to_string()).into_response();
        }
    };

    let repo = EnquiryRepository::new(state.pool());
    match submit_enquiry(&repo, state.mailer(), &enquiry).await {
        Ok(SubmissionOutcome::Confirmed { id }) => {
            tracing::info!(%id, "Enquiry submitted and confirmation sent");
            super::found("/success")
        }
        Ok(SubmissionOutcome::ConfirmationFailed { id }) => {
            tracing::info!(%id, "Enquiry submitted, confirmation email failed");
            "There was an error sending your confirmation email.".into_response()
        }
        Err(e) => {
            sentry::capture_error(&e);
            tracing::error!(error = %e, "Failed to insert enquiry");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "There was an error submitting your enquiry.",
            )
                .into_response()
        }
    }
}
