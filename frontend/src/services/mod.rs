//! Backend services.
//!
//! # Services
//!
//! - [`upload`] - multipart file upload to the detection endpoint

pub mod upload;

pub use upload::*;
