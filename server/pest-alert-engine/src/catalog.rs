//! Pest catalog: crop name -> ordered pest definitions.
//!
//! The built-in table covers soja, milho, capim and cana. A custom catalog can
//! be loaded from JSON of the form
//! `{"soja": [{"pestName": "...", "severity": "high", "recommendation": "...",
//! "triggers": {"heat": false, "rain": true, "humidity": true}}]}`.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::Severity;
use crate::weather::WeatherFlags;

/// Weather conditions a pest is declared to react to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerConditions {
  #[serde(default, rename = "heat")]
  pub needs_heat: bool,
  #[serde(default, rename = "rain")]
  pub needs_rain: bool,
  #[serde(default, rename = "humidity")]
  pub needs_humidity: bool,
}

impl TriggerConditions {
  pub const HEAT: Self = Self {
    needs_heat: true,
    needs_rain: false,
    needs_humidity: false,
  };
  pub const RAIN: Self = Self {
    needs_heat: false,
    needs_rain: true,
    needs_humidity: false,
  };
  pub const HUMIDITY: Self = Self {
    needs_heat: false,
    needs_rain: false,
    needs_humidity: true,
  };
  pub const RAIN_OR_HUMIDITY: Self = Self {
    needs_heat: false,
    needs_rain: true,
    needs_humidity: true,
  };
  pub const HEAT_OR_HUMIDITY: Self = Self {
    needs_heat: true,
    needs_rain: false,
    needs_humidity: true,
  };

  pub fn is_empty(&self) -> bool {
    !(self.needs_heat || self.needs_rain || self.needs_humidity)
  }

  /// True if any declared condition is observed (OR, not AND).
  pub fn is_triggered_by(&self, flags: &WeatherFlags) -> bool {
    (self.needs_heat && flags.is_hot)
      || (self.needs_rain && flags.is_rainy)
      || (self.needs_humidity && flags.is_humid)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PestDefinition {
  pub pest_name: String,
  pub triggers: TriggerConditions,
  pub severity: Severity,
  pub recommendation: String,
}

impl PestDefinition {
  pub fn new(
    pest_name: impl Into<String>,
    triggers: TriggerConditions,
    severity: Severity,
    recommendation: impl Into<String>,
  ) -> Self {
    Self {
      pest_name: pest_name.into(),
      triggers,
      severity,
      recommendation: recommendation.into(),
    }
  }
}

/// On-disk shape; severity is parsed loosely after deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPest {
  pest_name: String,
  severity: String,
  #[serde(default)]
  recommendation: String,
  #[serde(default)]
  triggers: TriggerConditions,
}

/// Immutable mapping from lowercased crop name to its pests, in catalog order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PestCatalog {
  crops: BTreeMap<String, Vec<PestDefinition>>,
}

impl PestCatalog {
  pub fn new() -> Self {
    Self::default()
  }

  /// Adds (or replaces) a crop entry. The name is lowercased.
  pub fn with_crop(mut self, crop: &str, pests: Vec<PestDefinition>) -> Self {
    self.crops.insert(crop.trim().to_lowercase(), pests);
    self
  }

  /// Case-insensitive lookup. `None` means the crop is unmapped.
  pub fn pests_for(&self, crop: &str) -> Option<&[PestDefinition]> {
    self
      .crops
      .get(&crop.trim().to_lowercase())
      .map(|v| v.as_slice())
  }

  /// Mapped crop names, sorted.
  pub fn crops(&self) -> Vec<&str> {
    self.crops.keys().map(|k| k.as_str()).collect()
  }

  pub fn len(&self) -> usize {
    self.crops.len()
  }

  pub fn is_empty(&self) -> bool {
    self.crops.is_empty()
  }

  pub fn from_json(json: &str) -> Result<Self, CatalogError> {
    let raw: BTreeMap<String, Vec<RawPest>> = serde_json::from_str(json)?;
    let mut catalog = Self::new();
    for (crop, pests) in raw {
      let crop = crop.trim().to_lowercase();
      if crop.is_empty() {
        return Err(CatalogError::validation("<empty>", "crop name must not be empty"));
      }
      let mut defs = Vec::with_capacity(pests.len());
      for p in pests {
        if p.pest_name.trim().is_empty() {
          return Err(CatalogError::validation(&crop, "pestName must not be empty"));
        }
        if p.triggers.is_empty() {
          return Err(CatalogError::validation(
            &crop,
            format!("{} declares no trigger conditions", p.pest_name),
          ));
        }
        let severity = Severity::from_str_loose(&p.severity).ok_or_else(|| {
          CatalogError::validation(&crop, format!("unknown severity {:?}", p.severity))
        })?;
        defs.push(PestDefinition::new(p.pest_name, p.triggers, severity, p.recommendation));
      }
      if catalog.crops.insert(crop.clone(), defs).is_some() {
        return Err(CatalogError::validation(&crop, "duplicate crop key (case-insensitive)"));
      }
    }
    Ok(catalog)
  }

  pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
    let raw = std::fs::read_to_string(path)?;
    Self::from_json(&raw)
  }

  /// Default table shipped with the app.
  pub fn builtin() -> Self {
    use Severity::*;
    use TriggerConditions as T;

    Self::new()
      .with_crop(
        "soja",
        vec![
          PestDefinition::new(
            "Ferrugem Asiática",
            T::RAIN_OR_HUMIDITY,
            High,
            "Aplique fungicida preventivo e monitore as folhas do baixeiro após períodos de chuva.",
          ),
          PestDefinition::new(
            "Lagarta-da-soja",
            T::HEAT,
            Medium,
            "Faça pano de batida semanal e controle quando houver mais de 20 lagartas por metro.",
          ),
          PestDefinition::new(
            "Percevejo-marrom",
            T::HEAT,
            Medium,
            "Monitore a partir do início da formação de vagens e aplique inseticida no nível de controle.",
          ),
        ],
      )
      .with_crop(
        "milho",
        vec![
          PestDefinition::new(
            "Lagarta-do-cartucho",
            T::HEAT,
            High,
            "Inspecione o cartucho das plantas e aplique controle biológico ou inseticida seletivo.",
          ),
          PestDefinition::new(
            "Cigarrinha-do-milho",
            T::HEAT,
            Medium,
            "Elimine o milho tiguera e monitore cigarrinhas nas primeiras semanas após a emergência.",
          ),
          PestDefinition::new(
            "Cercosporiose",
            T::RAIN_OR_HUMIDITY,
            Medium,
            "Use híbridos tolerantes e aplique fungicida ao surgirem as primeiras lesões.",
          ),
        ],
      )
      .with_crop(
        "capim",
        vec![
          PestDefinition::new(
            "Cigarrinha-das-pastagens",
            T::RAIN_OR_HUMIDITY,
            High,
            "Ajuste a lotação para rebaixar o pasto e avalie controle biológico com Metarhizium.",
          ),
          PestDefinition::new(
            "Lagarta-militar",
            T::HEAT,
            Medium,
            "Percorra a pastagem ao entardecer e controle focos antes que se espalhem.",
          ),
          PestDefinition::new(
            "Mancha-foliar",
            T::HUMIDITY,
            Low,
            "Evite excesso de adubação nitrogenada em períodos úmidos.",
          ),
        ],
      )
      .with_crop(
        "cana",
        vec![
          PestDefinition::new(
            "Broca-da-cana",
            T::HEAT,
            High,
            "Libere Cotesia flavipes e monitore a infestação nos colmos.",
          ),
          PestDefinition::new(
            "Cigarrinha-das-raízes",
            T::RAIN,
            Medium,
            "Monitore espuma na base das touceiras no início das chuvas.",
          ),
          PestDefinition::new(
            "Ferrugem-alaranjada",
            T::HEAT_OR_HUMIDITY,
            Medium,
            "Prefira variedades resistentes e avalie aplicação de fungicida em talhões sensíveis.",
          ),
        ],
      )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn builtin_maps_four_crops() {
    let catalog = PestCatalog::builtin();
    assert_eq!(catalog.crops(), vec!["cana", "capim", "milho", "soja"]);
    assert!(catalog.pests_for("SOJA").is_some());
    assert!(catalog.pests_for("feijão").is_none());
  }

  #[test]
  fn builtin_pests_all_declare_a_trigger() {
    let catalog = PestCatalog::builtin();
    for crop in catalog.crops() {
      for pest in catalog.pests_for(crop).unwrap() {
        assert!(!pest.triggers.is_empty(), "{} in {}", pest.pest_name, crop);
      }
    }
  }

  #[test]
  fn triggers_use_or_semantics() {
    let rain_only = WeatherFlags {
      is_rainy: true,
      ..Default::default()
    };
    assert!(TriggerConditions::RAIN_OR_HUMIDITY.is_triggered_by(&rain_only));
    assert!(!TriggerConditions::HEAT.is_triggered_by(&rain_only));
    assert!(!TriggerConditions::default().is_triggered_by(&WeatherFlags {
      is_hot: true,
      is_rainy: true,
      is_humid: true,
    }));
  }

  #[test]
  fn loads_json_and_lowercases_crop_keys() {
    let json = r#"{
      "Feijão": [
        {"pestName": "Mosca-branca", "severity": "Alta", "recommendation": "Monitore.",
         "triggers": {"heat": true}}
      ]
    }"#;
    let catalog = PestCatalog::from_json(json).unwrap();
    let pests = catalog.pests_for("feijão").unwrap();
    assert_eq!(pests.len(), 1);
    assert_eq!(pests[0].severity, Severity::High);
    assert!(pests[0].triggers.needs_heat);
    assert!(!pests[0].triggers.needs_rain);
  }

  #[test]
  fn rejects_pest_without_triggers() {
    let json = r#"{"soja": [{"pestName": "X", "severity": "low", "triggers": {}}]}"#;
    let err = PestCatalog::from_json(json).unwrap_err();
    assert!(err.to_string().contains("no trigger conditions"), "{}", err);
  }

  #[test]
  fn rejects_unknown_severity() {
    let json = r#"{"soja": [{"pestName": "X", "severity": "extreme", "triggers": {"rain": true}}]}"#;
    let err = PestCatalog::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::Validation { .. }));
    assert!(err.to_string().contains("soja"));
  }

  #[test]
  fn rejects_crop_keys_differing_only_by_case() {
    let json = r#"{
      "Soja": [{"pestName": "A", "severity": "high", "triggers": {"rain": true}}],
      "soja": [{"pestName": "B", "severity": "low", "triggers": {"heat": true}}]
    }"#;
    let err = PestCatalog::from_json(json).unwrap_err();
    assert!(matches!(err, CatalogError::Validation { ref crop, .. } if crop == "soja"));
    assert!(err.to_string().contains("duplicate crop key"), "{}", err);
  }

  #[test]
  fn malformed_json_is_a_json_error() {
    assert!(matches!(
      PestCatalog::from_json("{not json"),
      Err(CatalogError::Json(_))
    ));
  }
}
