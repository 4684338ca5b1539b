//! HTTP service uploading a file to the detection backend.

use gloo_net::http::Request;
use serde_json::Value;
use thiserror::Error;
use web_sys::{File, FormData};

use crate::config::{NETWORK_ERROR_MESSAGE, UPLOAD_FAILED_MESSAGE, UPLOAD_FIELD};
use crate::types::UploadResult;

/// Why an upload produced no score.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum UploadError {
    /// The backend answered with a non-success status.
    #[error("{0}")]
    Server(String),

    /// The request never completed.
    #[error("HTTP request failed: {0}")]
    Network(String),

    /// The multipart body or the request could not be built.
    #[error("Failed to build request: {0}")]
    Request(String),

    /// A body we cannot read as JSON, or a success body without a score.
    #[error("Failed to parse response: {0}")]
    InvalidResponse(String),
}

impl UploadError {
    /// Text for the error banner.
    pub fn user_message(&self) -> String {
        match self {
            UploadError::Server(message) => message.clone(),
            UploadError::Network(_)
            | UploadError::Request(_)
            | UploadError::InvalidResponse(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Upload `file` as multipart field `file` and wait for the score.
pub async fn upload_file(file: &File, endpoint: &str) -> Result<UploadResult, UploadError> {
    let form_data =
        FormData::new().map_err(|e| UploadError::Request(format!("FormData: {:?}", e)))?;

    form_data
        .append_with_blob_and_filename(UPLOAD_FIELD, file, &file.name())
        .map_err(|e| UploadError::Request(format!("append file: {:?}", e)))?;

    let request = Request::post(endpoint)
        .body(form_data)
        .map_err(|e| UploadError::Request(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| UploadError::Network(e.to_string()))?;

    log::debug!("📨 {} answered {} ({} bytes)", endpoint, status, body.len());

    interpret_response(response.ok(), &body)
}

/// Turn a status class and body into an outcome.
pub fn interpret_response(ok: bool, body: &str) -> Result<UploadResult, UploadError> {
    if !ok {
        return Err(UploadError::Server(server_error_message(body)?));
    }

    let result: UploadResult =
        serde_json::from_str(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

    if result.is_out_of_range() {
        log::warn!(
            "⚠️ Probability {} outside 0-100, clamping",
            result.ai_generated_probability
        );
    }

    Ok(result)
}

/// The `error` field of a failure body, or a generic message.
///
/// A failure body that is not JSON at all is an invalid response.
fn server_error_message(body: &str) -> Result<String, UploadError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

    Ok(value
        .get("error")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UPLOAD_FAILED_MESSAGE.to_string()))
}
