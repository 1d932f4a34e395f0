use anyhow::Result;
use envconfig::Envconfig;
use tracing::warn;

#[derive(Debug, Clone, Envconfig)]
pub struct AppConfig {
    // Server configuration
    #[envconfig(from = "SERVER_HOST", default = "0.0.0.0")]
    pub server_host: String,

    #[envconfig(from = "SERVER_PORT", default = "8080")]
    pub server_port: u16,

    // Storage configuration
    #[envconfig(from = "STORAGE_TYPE", default = "memory")]
    pub storage_type: String,

    // Logging
    #[envconfig(from = "LOG_LEVEL", default = "info")]
    pub log_level: String,

    #[envconfig(from = "LOG_FORMAT", default = "plain")]
    pub log_format: String,
}

impl AppConfig {
    /// Load configuration from environment variables only
    pub fn load_from_env() -> Result<Self> {
        Ok(Self::init_from_env()?)
    }

    pub fn server(&self) -> ServerConfig {
        ServerConfig {
            host: self.server_host.clone(),
            port: self.server_port,
        }
    }

    pub fn storage(&self) -> StorageConfig {
        let storage_type = match self.storage_type.to_lowercase().as_str() {
            "memory" => StorageType::Memory,
            other => {
                warn!(
                    "Unrecognized storage type '{}', falling back to 'memory'.",
                    other
                );
                StorageType::Memory
            }
        };

        StorageConfig { storage_type }
    }

    pub fn logging(&self) -> LoggingConfig {
        LoggingConfig {
            level: self.log_level.clone(),
            json_format: self.log_format.eq_ignore_ascii_case("json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub storage_type: StorageType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageType {
    Memory,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub json_format: bool,
}
