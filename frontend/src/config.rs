//! Application configuration.
//!
//! Centralized configuration for the code detector frontend.
//! These are compile-time constants; the page is served from the same
//! origin as the detection backend, so endpoints are relative.

/// Application name, used for the document title and the hero heading.
pub const APP_NAME: &str = "Code Detector";

/// Id of the host element the application mounts into.
pub const MOUNT_ELEMENT_ID: &str = "app";

/// Detection endpoint receiving the multipart upload.
pub const UPLOAD_ENDPOINT: &str = "/upload";

/// Multipart field name carrying the file.
pub const UPLOAD_FIELD: &str = "file";

/// How long an error banner stays visible before removing itself.
pub const ALERT_TIMEOUT_MS: u32 = 5_000;

/// Probabilities below this are rendered as "low".
pub const LOW_THRESHOLD: f64 = 30.0;

/// Probabilities at or above this are rendered as "high".
pub const HIGH_THRESHOLD: f64 = 70.0;

/// Shown when the form is submitted without a staged file.
pub const NO_FILE_MESSAGE: &str = "Please select a file first.";

/// Shown when the backend rejects the upload without saying why.
pub const UPLOAD_FAILED_MESSAGE: &str = "An error occurred during upload.";

/// Shown when the request never completed or the reply was unreadable.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error occurred.";
