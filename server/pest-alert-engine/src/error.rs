//! Structured error types for catalog loading.
//!
//! Evaluation itself never fails; these only surface when a custom catalog is read.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
  #[error("validation: {crop}: {reason}")]
  Validation { crop: String, reason: String },

  #[error("io: {0}")]
  Io(#[from] std::io::Error),

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl CatalogError {
  pub fn validation(crop: &str, reason: impl Into<String>) -> Self {
    Self::Validation {
      crop: crop.to_string(),
      reason: reason.into(),
    }
  }
}
