//! UI components for the code detector.
//!
//! # Layout Components
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadWidget`] - File upload with drag & drop, submission and score
//! - [`ResultPanel`] - Probability bar and reasoning
//! - [`AlertStack`] - Self-expiring error banners

mod hero;
mod upload;
mod result;
mod alerts;
mod footer;

pub use hero::*;
pub use upload::*;
pub use result::*;
pub use alerts::*;
pub use footer::*;

/// `base` plus Bootstrap's `d-none` when hidden.
pub(crate) fn visibility_class(base: &str, visible: bool) -> String {
    match (visible, base.is_empty()) {
        (true, _) => base.to_string(),
        (false, true) => "d-none".to_string(),
        (false, false) => format!("{} d-none", base),
    }
}
