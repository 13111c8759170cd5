//! Backend services.
//!
//! This module provides services for external communication:
//!
//! # Services
//!
//! - [`clean`] - file upload to the CleanSheet cleaning service
//!
//! The cleaning service is an external collaborator: everything of
//! substance (dedup, null handling, anomaly detection, file lifecycle)
//! happens server-side behind one POST endpoint.

pub mod clean;

pub use clean::*;
