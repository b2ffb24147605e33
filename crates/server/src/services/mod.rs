//! Application services.

pub mod email;
pub mod submission;

pub use email::{EmailError, EmailService};
pub use submission::{ConfirmationMailer, EnquiryStore, SubmissionOutcome, submit_enquiry};
