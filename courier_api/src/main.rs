mod app;
mod docs;
mod error;
mod ml;
mod service;
mod settings;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::serve;
use courier_estimator::{LogisticsEstimator, config::EstimatorConfig};
use tracing::{Level, info};

use crate::app::build_app;
use crate::settings::ApiSettings;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let settings = ApiSettings::from_env()?;

    let config = match &settings.estimator_config {
        Some(path) => {
            info!("Loading estimator config from {}", path.display());
            EstimatorConfig::from_json_file(path)
                .with_context(|| format!("Could not load {}", path.display()))?
        }
        None => EstimatorConfig::default(),
    };

    let state = Arc::new(AppState {
        estimator: LogisticsEstimator::new(config),
    });

    let (app, api) = build_app(state);

    if std::env::args().any(|a| a == "--generate-openapi") {
        std::fs::create_dir_all("schemas")?;
        let spec = serde_json::to_string_pretty(&api)?;
        std::fs::write("schemas/openapi.json", spec)?;
        info!("OpenAPI specification has been written to schemas/openapi.json");
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("Could not bind {}:{}", settings.host, settings.port))?;

    info!("Listening on {}", listener.local_addr()?);

    serve(listener, app).await?;

    Ok(())
}
