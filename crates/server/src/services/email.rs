//! Email service for sending enquiry confirmations.
//!
//! Uses SMTP via lettre for delivery with Askama HTML templates.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use enquiry_desk_core::Email;

use crate::config::EmailConfig;

/// Subject line of the confirmation email.
pub const CONFIRMATION_SUBJECT: &str = "Thank You for Your Enquiry!";

/// HTML template for the enquiry confirmation email.
#[derive(Template)]
#[template(path = "email/enquiry_confirmation.html")]
struct ConfirmationEmailHtml<'a> {
    full_name: &'a str,
}

/// Plain text template for the enquiry confirmation email.
#[derive(Template)]
#[template(path = "email/enquiry_confirmation.txt")]
struct ConfirmationEmailText<'a> {
    full_name: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// Email service for sending transactional emails.
#[derive(Clone)]
pub struct EmailService {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl EmailService {
    /// Create a new email service from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be constructed.
    pub fn new(config: &EmailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let mailer = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            mailer,
            from_address: config.from_address.clone(),
        })
    }

    /// Send the confirmation email for a new enquiry.
    ///
    /// The greeting embeds the submitted full name verbatim. One attempt
    /// only; delivery is not confirmed beyond the transport acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns error if the email fails to send or a template fails to render.
    pub async fn send_enquiry_confirmation(
        &self,
        to: &Email,
        full_name: &str,
    ) -> Result<(), EmailError> {
        let html = ConfirmationEmailHtml { full_name }.render()?;
        let text = ConfirmationEmailText { full_name }.render()?;

        self.send_multipart_email(to.as_str(), CONFIRMATION_SUBJECT, &text, &html)
            .await
    }

    /// Send a multipart email with both plain text and HTML versions.
    async fn send_multipart_email(
        &self,
        to: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), EmailError> {
        let email = Message::builder()
            .from(
                self.from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(self.from_address.clone()))?,
            )
            .to(to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(to.to_string()))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )?;

        self.mailer.send(email).await?;

        tracing::info!(to = %to, subject = %subject, "Email sent successfully");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_confirmation_subject() {
        assert_eq!(CONFIRMATION_SUBJECT, "Thank You for Your Enquiry!");
    }

    #[test]
    fn test_html_template_embeds_name_verbatim() {
        let html = ConfirmationEmailHtml { full_name: "A B" }.render().unwrap();
        assert!(html.contains("Dear A B,"));
        assert!(html.contains("Thank you for your enquiry"));
    }

    #[test]
    fn test_text_template_embeds_name_verbatim() {
        let text = ConfirmationEmailText {
            full_name: "Jordan Q. Sample",
        }
        .render()
        .unwrap();
        assert!(text.contains("Dear Jordan Q. Sample,"));
        assert!(text.contains("We will contact you shortly"));
    }

    #[test]
    fn test_html_template_escapes_markup() {
        let html = ConfirmationEmailHtml {
            full_name: "<script>",
        }
        .render()
        .unwrap();
        assert!(!html.contains("<script>"));
    }
}
