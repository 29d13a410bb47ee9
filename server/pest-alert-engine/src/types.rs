//! Input/output types for the pest alert engine (JSON contract with the web client).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Ordinal risk level of a pest. Ordering is `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
  Low,
  Medium,
  High,
}

impl Severity {
  /// Accepts English and Portuguese labels in any case.
  pub fn from_str_loose(s: &str) -> Option<Self> {
    match s.trim().to_lowercase().as_str() {
      "low" | "baixa" | "baixo" => Some(Self::Low),
      "medium" | "media" | "média" | "medio" | "médio" => Some(Self::Medium),
      "high" | "alta" | "alto" => Some(Self::High),
      _ => None,
    }
  }
}

// ---------------------------------------------------------------------------
// Inbound types (what the caller sends)
// ---------------------------------------------------------------------------

/// Current weather at the user's location, as reshaped by the weather function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
  pub description: String,
  pub humidity: f64,
}

/// One (plot, crop) pair from the user's registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredCrop {
  #[serde(default)]
  pub crop_id: String,
  pub crop_name: String,
}

impl RegisteredCrop {
  pub fn new(crop_id: impl Into<String>, crop_name: impl Into<String>) -> Self {
    Self {
      crop_id: crop_id.into(),
      crop_name: crop_name.into(),
    }
  }
}

/// A single crop checked against a single weather snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CropObservation {
  pub crop_name: String,
  pub weather_description: String,
  pub humidity_percent: f64,
}

/// Aggregate request: every registered crop against the current weather.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RegistryObservation {
  pub crops: Vec<RegisteredCrop>,
  #[serde(default)]
  pub weather: Option<WeatherObservation>,
}

/// One request object read by the binary. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Request {
  Registry(RegistryObservation),
  Crop(CropObservation),
}

// ---------------------------------------------------------------------------
// Output (what we emit)
// ---------------------------------------------------------------------------

/// Decision object for the alert presenter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertVerdict {
  pub has_alert: bool,
  pub message: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub severity: Option<Severity>,
  #[serde(default)]
  pub affected_crops: Vec<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub recommendations: Option<Vec<String>>,
}

impl AlertVerdict {
  /// Non-alerting verdict carrying only a message.
  pub fn quiet(message: impl Into<String>) -> Self {
    Self {
      has_alert: false,
      message: message.into(),
      severity: None,
      affected_crops: Vec::new(),
      recommendations: None,
    }
  }
}
