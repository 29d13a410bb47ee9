//! Binary entrypoint: read one JSON request from stdin, write one verdict to stdout.
//!
//! Set `PEST_CATALOG_PATH` to evaluate against a JSON catalog instead of the built-in one.

use pest_alert_engine::{run, PestCatalog, PestRiskEvaluator, Request, WeatherRules};
use std::io::{self, Read, Write};

fn main() {
  if let Err(e) = run_binary() {
    let _ = writeln!(io::stderr(), "pest-alert-engine error: {}", e);
    std::process::exit(1);
  }
}

fn run_binary() -> Result<(), Box<dyn std::error::Error>> {
  let catalog_path = std::env::var_os("PEST_CATALOG_PATH")
    .filter(|p| !p.to_string_lossy().trim().is_empty());
  let evaluator = match catalog_path {
    Some(path) => PestRiskEvaluator::new(PestCatalog::from_path(path)?, WeatherRules::default()),
    None => PestRiskEvaluator::with_defaults(),
  };

  let mut raw = String::new();
  io::stdin().lock().read_to_string(&mut raw)?;
  let request: Request = serde_json::from_str(&raw)?;

  let out = run(&evaluator, &request);
  let json = serde_json::to_vec(&out)?;
  io::stdout().write_all(&json)?;
  Ok(())
}
