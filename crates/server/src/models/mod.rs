//! Domain models for the enquiry server.

pub mod enquiry;
pub mod session;

pub use enquiry::{EducationRecord, Enquiry, EnquiryForm, NewEnquiry, ValidationError};
pub use session::CurrentAdmin;
pub use session::keys as session_keys;
