use std::env;
use std::path::Path;

use gpuplan_api::state::AppState;
use gpuplan_core::pricing::Pricing;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    let pricing = match env::var("GPUPLAN_PRICING") {
        Ok(path) => Pricing::load(Path::new(&path))?,
        Err(_) => {
            tracing::info!("GPUPLAN_PRICING not set, using built-in pricing");
            Pricing::builtin()
        }
    };
    let addr = env::var("GPUPLAN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

    let app = gpuplan_api::app(AppState::new(pricing));
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "gpuplan api listening");

    axum::serve(listener, app).await?;
    Ok(())
}
