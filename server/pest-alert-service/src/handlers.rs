//! HTTP handlers for the pest alert service.

use axum::{extract::State, Json};
use std::sync::Arc;

use pest_alert_engine::types::{CropObservation, RegistryObservation};
use pest_alert_engine::AlertVerdict;

use crate::state::AppState;

pub async fn health() -> &'static str {
  "ok"
}

pub async fn evaluate_crop(
  State(state): State<Arc<AppState>>,
  Json(obs): Json<CropObservation>,
) -> Json<AlertVerdict> {
  let verdict = state
    .evaluator
    .evaluate_crop(&obs.crop_name, &obs.weather_description, obs.humidity_percent);
  log_verdict(&verdict);
  Json(verdict)
}

pub async fn evaluate_registry(
  State(state): State<Arc<AppState>>,
  Json(obs): Json<RegistryObservation>,
) -> Json<AlertVerdict> {
  tracing::debug!(
    crops = obs.crops.len(),
    has_weather = obs.weather.is_some(),
    "evaluating registered crops"
  );
  let verdict = state
    .evaluator
    .evaluate_all_registered_crops(&obs.crops, obs.weather.as_ref());
  log_verdict(&verdict);
  Json(verdict)
}

pub async fn list_crops(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
  Json(
    state
      .evaluator
      .catalog()
      .crops()
      .into_iter()
      .map(String::from)
      .collect(),
  )
}

fn log_verdict(verdict: &AlertVerdict) {
  if verdict.has_alert {
    tracing::info!(
      severity = ?verdict.severity,
      crops = ?verdict.affected_crops,
      message = %verdict.message,
      "pest alert"
    );
  } else {
    tracing::debug!(message = %verdict.message, "no pest alert");
  }
}
