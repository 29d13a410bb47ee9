//! Pest risk evaluation: one crop, or every registered crop at once.

use std::cmp::Reverse;
use std::collections::HashSet;

use crate::catalog::PestCatalog;
use crate::types::{AlertVerdict, RegisteredCrop, WeatherObservation};
use crate::weather::WeatherRules;

pub const NO_CROPS_MESSAGE: &str =
  "Cadastre culturas nos seus talhões para receber alertas de pragas.";
pub const AWAITING_WEATHER_MESSAGE: &str =
  "Aguardando dados climáticos para avaliar o risco de pragas.";
pub const MONITORING_MESSAGE: &str = "Monitoramento ativo. Nenhum alerta de pragas no momento.";

/// Holds the catalog and weather rules; evaluation is pure over these.
#[derive(Debug, Clone)]
pub struct PestRiskEvaluator {
  catalog: PestCatalog,
  rules: WeatherRules,
}

impl PestRiskEvaluator {
  pub fn new(catalog: PestCatalog, rules: WeatherRules) -> Self {
    Self { catalog, rules }
  }

  pub fn with_defaults() -> Self {
    Self::new(PestCatalog::builtin(), WeatherRules::default())
  }

  pub fn catalog(&self) -> &PestCatalog {
    &self.catalog
  }

  /// Verdict for one crop under one weather snapshot.
  pub fn evaluate_crop(
    &self,
    crop_name: &str,
    weather_description: &str,
    humidity_percent: f64,
  ) -> AlertVerdict {
    let pests = match self.catalog.pests_for(crop_name) {
      Some(p) => p,
      None => return AlertVerdict::quiet(format!("Monitoramento ativo para {}", crop_name)),
    };

    let flags = self.rules.classify(weather_description, humidity_percent);
    let mut qualifying: Vec<_> = pests
      .iter()
      .filter(|p| p.triggers.is_triggered_by(&flags))
      .collect();
    // Stable: catalog order decides ties.
    qualifying.sort_by_key(|p| Reverse(p.severity));

    match qualifying.first() {
      Some(pest) => AlertVerdict {
        has_alert: true,
        message: format!("Atenção em {}: risco de {}", crop_name, pest.pest_name),
        severity: Some(pest.severity),
        affected_crops: Vec::new(),
        recommendations: Some(vec![pest.recommendation.clone()]),
      },
      None => AlertVerdict::quiet(format!(
        "Monitoramento ativo para {}. Sem alertas no momento.",
        crop_name
      )),
    }
  }

  /// Single most severe verdict across the user's registered crops.
  ///
  /// Only the top crop is reported in `affected_crops`; other alerting crops
  /// of equal or lower severity are not listed.
  pub fn evaluate_all_registered_crops(
    &self,
    crops: &[RegisteredCrop],
    weather: Option<&WeatherObservation>,
  ) -> AlertVerdict {
    self.aggregate(crops, weather, |name, w| {
      self.evaluate_crop(name, &w.description, w.humidity)
    })
  }

  fn aggregate<F>(
    &self,
    crops: &[RegisteredCrop],
    weather: Option<&WeatherObservation>,
    mut evaluate: F,
  ) -> AlertVerdict
  where
    F: FnMut(&str, &WeatherObservation) -> AlertVerdict,
  {
    if crops.is_empty() {
      return AlertVerdict::quiet(NO_CROPS_MESSAGE);
    }
    let weather = match weather {
      Some(w) => w,
      None => return AlertVerdict::quiet(AWAITING_WEATHER_MESSAGE),
    };

    let mut best = AlertVerdict::quiet(MONITORING_MESSAGE);
    for name in distinct_crop_names(crops) {
      let verdict = evaluate(name, weather);
      // Option ordering puts None below any severity.
      if verdict.has_alert && verdict.severity > best.severity {
        best = AlertVerdict {
          affected_crops: vec![name.to_string()],
          ..verdict
        };
      }
    }
    best
  }
}

impl Default for PestRiskEvaluator {
  fn default() -> Self {
    Self::with_defaults()
  }
}

/// Crop names with case-insensitive duplicates removed; first spelling and order kept.
pub fn distinct_crop_names(crops: &[RegisteredCrop]) -> Vec<&str> {
  let mut seen = HashSet::new();
  crops
    .iter()
    .map(|c| c.crop_name.as_str())
    .filter(|name| seen.insert(name.trim().to_lowercase()))
    .collect()
}
