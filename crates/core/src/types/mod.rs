//! Core types for Enquiry Desk.
//!
//! Type-safe wrappers for the domain concepts shared across the workspace.

pub mod email;
pub mod id;
pub mod qualification;

pub use email::{Email, EmailError};
pub use id::*;
pub use qualification::{AcademicQualification, QualificationError};
