use crate::config::LoggingConfig;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, layer::SubscriberExt, util::SubscriberInitExt,
};

#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub service_name: String,
    pub log_level: String,
    pub json_format: bool,
}

impl TracingConfig {
    pub fn from_logging(service_name: &str, logging: &LoggingConfig) -> Self {
        Self {
            service_name: service_name.to_string(),
            log_level: logging.level.clone(),
            json_format: logging.json_format,
        }
    }
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn setup_tracing(
    config: TracingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_file(true)
        .with_line_number(true);

    let fmt_layer = if config.json_format {
        fmt_layer.json().boxed()
    } else {
        fmt_layer.boxed()
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::debug!(service = %config.service_name, "Tracing initialized");
    Ok(())
}
