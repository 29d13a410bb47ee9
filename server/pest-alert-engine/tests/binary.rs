//! Stdin/stdout contract of the pest-alert-engine binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pest_alert_engine::{AlertVerdict, Severity};

fn run_engine(input: &str, catalog_path: Option<&str>) -> Output {
  let mut cmd = Command::new(env!("CARGO_BIN_EXE_pest-alert-engine"));
  cmd
    .stdin(Stdio::piped())
    .stdout(Stdio::piped())
    .stderr(Stdio::piped())
    .env_remove("PEST_CATALOG_PATH");
  if let Some(path) = catalog_path {
    cmd.env("PEST_CATALOG_PATH", path);
  }
  let mut child = cmd.spawn().unwrap();
  // The binary may exit before reading stdin (bad catalog), so a broken pipe is fine.
  let _ = child.stdin.take().unwrap().write_all(input.as_bytes());
  child.wait_with_output().unwrap()
}

#[test]
fn crop_request_writes_verdict_json() {
  let out = run_engine(
    r#"{"cropName":"soja","weatherDescription":"Muita chuva e alta umidade","humidityPercent":80}"#,
    None,
  );
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

  let verdict: AlertVerdict = serde_json::from_slice(&out.stdout).unwrap();
  assert!(verdict.has_alert);
  assert_eq!(verdict.severity, Some(Severity::High));
  assert!(verdict.message.contains("Ferrugem Asiática"));

  let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(json["hasAlert"], true);
}

#[test]
fn registry_request_writes_top_crop() {
  let out = run_engine(
    r#"{"crops":[{"cropId":"1","cropName":"milho"},{"cropId":"2","cropName":"Soja"}],
        "weather":{"description":"chuva","humidity":50}}"#,
    None,
  );
  assert!(out.status.success());
  let verdict: AlertVerdict = serde_json::from_slice(&out.stdout).unwrap();
  assert_eq!(verdict.affected_crops, vec!["Soja".to_string()]);
}

#[test]
fn malformed_input_exits_with_error_line() {
  let out = run_engine("{not json", None);
  assert_eq!(out.status.code(), Some(1));
  assert!(out.stdout.is_empty());
  let stderr = String::from_utf8_lossy(&out.stderr);
  assert!(stderr.starts_with("pest-alert-engine error:"), "stderr: {}", stderr);
}

#[test]
fn catalog_path_replaces_builtin_table() {
  let mut file = tempfile::NamedTempFile::new().unwrap();
  write!(
    file,
    r#"{{"tomate": [{{"pestName": "Requeima", "severity": "alta", "recommendation": "Aplique fungicida.",
        "triggers": {{"rain": true}}}}]}}"#
  )
  .unwrap();
  let path = file.path().to_str().unwrap();

  let out = run_engine(
    r#"{"cropName":"Tomate","weatherDescription":"chuva","humidityPercent":40}"#,
    Some(path),
  );
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  let verdict: AlertVerdict = serde_json::from_slice(&out.stdout).unwrap();
  assert!(verdict.message.contains("Requeima"));

  let out = run_engine(
    r#"{"cropName":"soja","weatherDescription":"chuva","humidityPercent":90}"#,
    Some(path),
  );
  let verdict: AlertVerdict = serde_json::from_slice(&out.stdout).unwrap();
  assert!(!verdict.has_alert);
}

#[test]
fn missing_catalog_file_exits_with_error_line() {
  let out = run_engine(
    r#"{"cropName":"soja","weatherDescription":"sol","humidityPercent":40}"#,
    Some("/nonexistent/pragas.json"),
  );
  assert_eq!(out.status.code(), Some(1));
  assert!(String::from_utf8_lossy(&out.stderr).contains("pest-alert-engine error: io:"));
}

#[test]
fn blank_catalog_path_uses_builtin_table() {
  let out = run_engine(
    r#"{"cropName":"soja","weatherDescription":"chuva","humidityPercent":90}"#,
    Some("  "),
  );
  assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
  let verdict: AlertVerdict = serde_json::from_slice(&out.stdout).unwrap();
  assert!(verdict.has_alert);
}
