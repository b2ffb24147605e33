//! Enquiry Desk Core - Shared types library.
//!
//! This crate provides the domain types used by the Enquiry Desk server:
//! validated email addresses, type-safe IDs, and the academic qualification
//! enumeration carried by enquiry records.
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access, no HTTP
//! clients. Database support (sqlx encode/decode impls) is opt-in behind the
//! `postgres` feature.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
