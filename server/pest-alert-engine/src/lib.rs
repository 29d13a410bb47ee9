//! AgroFácil Pest Alert Engine — rule-based pest/disease alerts; no AI, no DB, no network.
//! Used by the binary for stdin/stdout; can also be called as a library.

pub mod catalog;
pub mod error;
pub mod evaluator;
pub mod types;
pub mod weather;

pub use catalog::{PestCatalog, PestDefinition, TriggerConditions};
pub use error::CatalogError;
pub use evaluator::PestRiskEvaluator;
pub use types::{AlertVerdict, RegisteredCrop, Request, Severity, WeatherObservation};
pub use weather::{WeatherFlags, WeatherRules};

/// Evaluate one crop against the built-in catalog.
pub fn evaluate_crop(crop_name: &str, weather_description: &str, humidity_percent: f64) -> AlertVerdict {
  PestRiskEvaluator::with_defaults().evaluate_crop(crop_name, weather_description, humidity_percent)
}

/// Evaluate every registered crop against the built-in catalog.
pub fn evaluate_all_registered_crops(
  crops: &[RegisteredCrop],
  weather: Option<&WeatherObservation>,
) -> AlertVerdict {
  PestRiskEvaluator::with_defaults().evaluate_all_registered_crops(crops, weather)
}

/// Run the engine on a parsed request and return the verdict (no I/O).
pub fn run(evaluator: &PestRiskEvaluator, request: &Request) -> AlertVerdict {
  match request {
    Request::Crop(obs) => {
      evaluator.evaluate_crop(&obs.crop_name, &obs.weather_description, obs.humidity_percent)
    }
    Request::Registry(obs) => evaluator.evaluate_all_registered_crops(&obs.crops, obs.weather.as_ref()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn run_dispatches_crop_request() {
    let request: Request = serde_json::from_str(
      r#"{"cropName":"capim","weatherDescription":"chuvoso","humidityPercent":60}"#,
    )
    .unwrap();
    let out = run(&PestRiskEvaluator::with_defaults(), &request);
    assert!(out.has_alert);
    assert_eq!(out.severity, Some(Severity::High));
    assert!(out.message.contains("Cigarrinha-das-pastagens"));
  }

  #[test]
  fn run_dispatches_registry_request() {
    let request: Request = serde_json::from_str(
      r#"{"crops":[{"cropId":"a","cropName":"cana"}],"weather":{"description":"calor","humidity":30}}"#,
    )
    .unwrap();
    let out = run(&PestRiskEvaluator::with_defaults(), &request);
    assert!(out.has_alert);
    assert_eq!(out.affected_crops, vec!["cana".to_string()]);
  }

  #[test]
  fn free_functions_use_builtin_catalog() {
    assert!(evaluate_crop("soja", "chuva", 50.0).has_alert);
    assert!(!evaluate_all_registered_crops(&[], None).has_alert);
  }
}
