//! Application configuration.
//!
//! Centralized configuration for the CleanSheet frontend.
//! In development, these are hardcoded. In production, they could be
//! loaded from environment or a config file.

/// Backend API base URL.
///
/// The CleanSheet cleaning service. Also the origin the cleaned-file
/// download link points at.
pub const BACKEND_URL: &str = "http://127.0.0.1:8000";

/// Application name, shown in the header and page title.
pub const APP_NAME: &str = "CleanSheet";

/// Maximum file size the cleaning service accepts (in bytes).
///
/// 10 MB, enforced server-side. Shown in the upload hint so users
/// learn the limit before the server rejects them.
pub const MAX_FILE_SIZE: usize = 10 * 1024 * 1024;
