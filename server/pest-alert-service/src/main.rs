//! Binary entrypoint for the pest alert service.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pest_alert_service::{router, AppState, ServiceConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  tracing_subscriber::registry()
    .with(filter)
    .with(tracing_subscriber::fmt::layer())
    .init();

  let config = ServiceConfig::from_env()?;
  let state = AppState::load(&config)?;
  tracing::info!(
    crops = state.evaluator.catalog().len(),
    custom_catalog = config.catalog_path.is_some(),
    "pest catalog loaded"
  );

  let app = router(Arc::new(state));
  let addr = config.socket_addr();
  tracing::info!(%addr, "pest-alert-service listening");

  let listener = tokio::net::TcpListener::bind(addr).await?;
  axum::serve(listener, app).await?;

  Ok(())
}
