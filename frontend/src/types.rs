//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **API Types** - Cleaning service response structures
//! - **View State** - The upload lifecycle and its rendering helpers
//! - **Error Types** - Frontend error handling

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the `/clean-data` endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanResponse {
    /// Human-readable completion message ("Smart cleaning complete")
    pub message: String,
    /// Path of the cleaned file, relative to the backend origin
    pub download_file: String,
    /// What the cleaning pass did
    pub report: CleanReport,
}

impl CleanResponse {
    /// Absolute URL of the cleaned file.
    ///
    /// The backend returns a relative path (e.g. `temp/cleaned_<id>.csv`),
    /// served from the same origin as the API.
    pub fn download_url(&self, backend_url: &str) -> String {
        format!("{}/{}", backend_url, self.download_file)
    }
}

/// Cleaning report attached to a successful response.
///
/// Older service builds report `anomalies_removed`, newer ones also report
/// `columns_standardized`; both are optional here so either shape parses.
/// A missing field simply doesn't render.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CleanReport {
    /// Row count of the uploaded file
    pub rows_before: usize,
    /// Row count after cleaning
    pub rows_after: usize,
    /// Rows merged away by fuzzy duplicate matching
    pub duplicates_removed: usize,
    /// Rows dropped for containing nulls
    pub null_rows_removed: usize,
    /// Rows flagged as outliers and dropped
    pub anomalies_removed: Option<usize>,
    /// Whether column names were normalized
    pub columns_standardized: Option<bool>,
    /// Seconds until the backend garbage-collects the cleaned file
    pub file_auto_deleted_in_seconds: u64,
}

/// Render a report flag the way the page displays it.
pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

// =============================================================================
// View State
// =============================================================================

/// Lifecycle of the latest upload.
///
/// One signal holds a single `UploadState`; every submission fully replaces
/// it, so the page always reflects the most recent request and nothing else.
/// Components render from the pure helpers below rather than poking at
/// individual elements.
#[derive(Clone, Debug, PartialEq)]
pub enum UploadState {
    /// Nothing submitted yet
    Idle,
    /// Request in flight; stale results are hidden
    Uploading,
    /// Cleaning finished, response ready to render
    Complete(CleanResponse),
    /// The request failed (transport, server, or parse error)
    Failed(String),
}

impl UploadState {
    /// Whether a request is currently in flight.
    pub fn is_uploading(&self) -> bool {
        matches!(self, UploadState::Uploading)
    }

    /// Text for the status line.
    pub fn status_text(&self) -> String {
        match self {
            UploadState::Idle => String::new(),
            UploadState::Uploading => "Processing...".to_string(),
            UploadState::Complete(response) => response.message.clone(),
            UploadState::Failed(_) => "Cleaning failed".to_string(),
        }
    }

    /// Error detail for the error element, if the last request failed.
    pub fn error_detail(&self) -> Option<String> {
        match self {
            UploadState::Failed(detail) => Some(detail.clone()),
            _ => None,
        }
    }

    /// Latest successful response, cloned for rendering.
    ///
    /// `None` hides the download link and report box.
    pub fn response(&self) -> Option<CleanResponse> {
        match self {
            UploadState::Complete(response) => Some(response.clone()),
            _ => None,
        }
    }

    /// Cleaning report of the latest successful response.
    pub fn report(&self) -> Option<CleanReport> {
        self.response().map(|response| response.report)
    }
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for everything downstream of the submit click.
/// A missing file selection is not an error: it is handled synchronously
/// with an alert before any of this machinery runs.
#[derive(Clone, Debug, PartialEq)]
pub enum AppError {
    /// Building the multipart request failed.
    Upload(String),
    /// Network/HTTP transport error.
    Network(String),
    /// Backend answered with a non-success status.
    Server(u16, String),
    /// Response body didn't parse as the expected JSON shape.
    Parse(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Upload(msg) => write!(f, "Upload error: {}", msg),
            AppError::Network(msg) => write!(f, "Network error: {}", msg),
            AppError::Server(status, detail) => write!(f, "Server error ({}): {}", status, detail),
            AppError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BACKEND_URL;

    fn sample_response() -> CleanResponse {
        CleanResponse {
            message: "OK".to_string(),
            download_file: "out.csv".to_string(),
            report: CleanReport {
                rows_before: 100,
                rows_after: 90,
                duplicates_removed: 5,
                null_rows_removed: 5,
                anomalies_removed: Some(0),
                columns_standardized: None,
                file_auto_deleted_in_seconds: 60,
            },
        }
    }

    #[test]
    fn report_parses_with_either_variant_field() {
        // Older shape: anomalies only
        let json = r#"{
            "rows_before": 100,
            "rows_after": 90,
            "duplicates_removed": 5,
            "null_rows_removed": 5,
            "anomalies_removed": 0,
            "file_auto_deleted_in_seconds": 60
        }"#;
        let report: CleanReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.anomalies_removed, Some(0));
        assert_eq!(report.columns_standardized, None);

        // Newer shape: column standardization only
        let json = r#"{
            "rows_before": 10,
            "rows_after": 8,
            "duplicates_removed": 1,
            "null_rows_removed": 1,
            "columns_standardized": true,
            "file_auto_deleted_in_seconds": 300
        }"#;
        let report: CleanReport = serde_json::from_str(json).unwrap();
        assert_eq!(report.anomalies_removed, None);
        assert_eq!(report.columns_standardized, Some(true));
    }

    #[test]
    fn status_text_follows_the_upload_lifecycle() {
        assert_eq!(UploadState::Idle.status_text(), "");
        assert_eq!(UploadState::Uploading.status_text(), "Processing...");
        assert_eq!(
            UploadState::Complete(sample_response()).status_text(),
            "OK"
        );
        assert_eq!(
            UploadState::Failed("connection refused".to_string()).status_text(),
            "Cleaning failed"
        );
    }

    #[test]
    fn results_hidden_until_a_response_lands() {
        assert!(UploadState::Idle.response().is_none());
        assert!(UploadState::Uploading.response().is_none());
        assert!(UploadState::Failed("x".to_string()).response().is_none());
        assert!(UploadState::Complete(sample_response()).response().is_some());
    }

    #[test]
    fn download_url_joins_backend_origin_and_relative_path() {
        let response = sample_response();
        assert_eq!(
            response.download_url(BACKEND_URL),
            "http://127.0.0.1:8000/out.csv"
        );
    }

    #[test]
    fn rendering_the_same_state_twice_is_idempotent() {
        let state = UploadState::Complete(sample_response());
        assert_eq!(state.status_text(), state.status_text());
        assert_eq!(state.response(), state.response());
        assert_eq!(state.report(), state.report());
    }

    #[test]
    fn flags_render_as_yes_no() {
        assert_eq!(yes_no(true), "Yes");
        assert_eq!(yes_no(false), "No");
    }

    #[test]
    fn only_uploading_reports_in_flight() {
        assert!(UploadState::Uploading.is_uploading());
        assert!(!UploadState::Idle.is_uploading());
        assert!(!UploadState::Complete(sample_response()).is_uploading());
        assert!(!UploadState::Failed("x".to_string()).is_uploading());
    }
}
