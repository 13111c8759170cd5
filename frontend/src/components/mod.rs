//! UI Components for the CleanSheet application.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Brand bar
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File selection, submission, and status line
//! - [`ResultSection`] - Download link and cleaning report

mod footer;
mod header;
mod hero;
mod result;
mod upload;

pub use footer::*;
pub use header::*;
pub use hero::*;
pub use result::*;
pub use upload::*;
