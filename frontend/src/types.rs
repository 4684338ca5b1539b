//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **API Types** - Backend response structures
//! - **Score Types** - Probability classification for display
//! - **Error Types** - Frontend error handling

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{HIGH_THRESHOLD, LOW_THRESHOLD};

// =============================================================================
// API Response Types
// =============================================================================

/// Response from the backend upload endpoint on success.
///
/// Extra fields sent by the backend (such as `success`) are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    /// Likelihood, in percent, that the file was machine-written.
    #[serde(deserialize_with = "deserialize_percent")]
    pub ai_generated_probability: f64,
    /// Free-form explanation of the score
    #[serde(default, deserialize_with = "deserialize_text")]
    pub reasoning: Option<String>,
    /// Name of the analyzed file, as echoed by the backend
    #[serde(default)]
    pub filename: Option<String>,
}

impl UploadResult {
    /// Probability clamped to `[0, 100]`.
    pub fn probability(&self) -> f64 {
        self.ai_generated_probability.clamp(0.0, 100.0)
    }

    /// Whether the backend sent a value outside `[0, 100]`.
    pub fn is_out_of_range(&self) -> bool {
        !(0.0..=100.0).contains(&self.ai_generated_probability)
    }

    /// Reasoning text, if present and non-empty.
    pub fn reasoning(&self) -> Option<&str> {
        self.reasoning.as_deref().filter(|text| !text.is_empty())
    }
}

/// Accepts a JSON number or a numeric string; rejects anything non-finite.
fn deserialize_percent<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    let value = match Raw::deserialize(deserializer)? {
        Raw::Number(number) => number,
        Raw::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("probability is not a number: {:?}", text)))?,
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(de::Error::custom("probability is not finite"))
    }
}

/// Keeps string values; anything else (number, object, null) becomes `None`.
fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Null => Ok(None),
        other => {
            log::warn!("⚠️ Ignoring non-text reasoning: {}", other);
            Ok(None)
        }
    }
}

// =============================================================================
// Score Types
// =============================================================================

/// Color band of the probability bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProbabilityLevel {
    /// Below 30%
    Low,
    /// From 30% up to (not including) 70%
    Medium,
    /// 70% and above
    High,
}

impl ProbabilityLevel {
    /// Classify a percentage.
    pub fn from_percent(percent: f64) -> Self {
        if percent < LOW_THRESHOLD {
            ProbabilityLevel::Low
        } else if percent < HIGH_THRESHOLD {
            ProbabilityLevel::Medium
        } else {
            ProbabilityLevel::High
        }
    }

    /// Get CSS class for the bar fill.
    pub fn css_class(&self) -> &'static str {
        match self {
            ProbabilityLevel::Low => "bg-success",
            ProbabilityLevel::Medium => "bg-warning",
            ProbabilityLevel::High => "bg-danger",
        }
    }
}

/// Format a percentage for display: one decimal at most, `85%` not `85.0%`.
pub fn format_percent(percent: f64) -> String {
    // adding +0.0 turns -0.0 into 0.0
    let rounded = (percent * 10.0).round() / 10.0 + 0.0;
    format!("{}%", rounded)
}

// =============================================================================
// Error Types
// =============================================================================

/// Application-level errors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum AppError {
    /// A required host element is absent from the page.
    #[error("Missing required element #{0}")]
    MissingElement(String),

    /// An element exists but has the wrong type.
    #[error("Element #{id} is not a {expected}")]
    WrongElement { id: String, expected: &'static str },
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
