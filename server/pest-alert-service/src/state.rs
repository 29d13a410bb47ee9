//! Shared, read-only service state.

use pest_alert_engine::{CatalogError, PestCatalog, PestRiskEvaluator, WeatherRules};

use crate::config::ServiceConfig;

pub struct AppState {
  pub evaluator: PestRiskEvaluator,
}

impl AppState {
  pub fn new(evaluator: PestRiskEvaluator) -> Self {
    Self { evaluator }
  }

  /// Loads the configured catalog, or the built-in one when none is set.
  pub fn load(config: &ServiceConfig) -> Result<Self, CatalogError> {
    let catalog = match &config.catalog_path {
      Some(path) => PestCatalog::from_path(path)?,
      None => PestCatalog::builtin(),
    };
    Ok(Self::new(PestRiskEvaluator::new(catalog, WeatherRules::default())))
  }
}
