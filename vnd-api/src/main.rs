use anyhow::Result;
use clap::Command;
use tracing::{error, info};
use vnd_api::{
    bootstrap::build_api_server,
    config::AppConfig,
    telemetry::{TracingConfig, setup_tracing},
};

#[tokio::main]
async fn main() -> Result<()> {
    let _matches = Command::new("vnd-api")
        .about("Vendor REST API")
        .version(env!("CARGO_PKG_VERSION"))
        .get_matches();

    let config = AppConfig::load_from_env()?;

    let tracing_config =
        TracingConfig::from_logging("vnd-api", &config.logging());
    if let Err(e) = setup_tracing(tracing_config) {
        anyhow::bail!("Failed to setup tracing: {e}");
    }

    info!("Starting Vendor API with environment-based config");
    let server = build_api_server(&config).await?;

    if let Err(e) = server.serve().await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
