//! Weather classification: description keywords + humidity threshold.

/// Tunable rules for turning a weather snapshot into flags.
#[derive(Debug, Clone)]
pub struct WeatherRules {
  /// Substrings in the description that mean hot weather.
  pub hot_keywords: Vec<String>,
  /// Substrings in the description that mean rain.
  pub rainy_keywords: Vec<String>,
  /// Humidity strictly above this counts as humid.
  pub humid_threshold: f64,
}

impl Default for WeatherRules {
  fn default() -> Self {
    Self {
      hot_keywords: vec!["calor".into(), "quente".into(), "sol".into()],
      rainy_keywords: vec!["chuva".into(), "chuvoso".into()],
      humid_threshold: 70.0,
    }
  }
}

/// Observed conditions a pest can be triggered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeatherFlags {
  pub is_hot: bool,
  pub is_rainy: bool,
  pub is_humid: bool,
}

impl WeatherRules {
  /// Description is matched case-insensitively; humidity is not range-checked.
  pub fn classify(&self, description: &str, humidity_percent: f64) -> WeatherFlags {
    let d = description.to_lowercase();
    WeatherFlags {
      is_hot: self.hot_keywords.iter().any(|k| d.contains(k.as_str())),
      is_rainy: self.rainy_keywords.iter().any(|k| d.contains(k.as_str())),
      is_humid: humidity_percent > self.humid_threshold,
    }
  }
}
