use anyhow::Result;
use std::sync::Arc;

use crate::{
    config::AppConfig, server::ApiServer, services::VendorService,
    storage::create_storage_factory,
};
use vnd_storage::StorageFactory;

/// Build a fully-wired ApiServer from environment variables.
/// Mirrors the logic in bin/main and is useful for tests and embedding.
pub async fn build_api_server_from_env() -> Result<ApiServer> {
    let config = AppConfig::load_from_env()?;
    build_api_server(&config).await
}

pub async fn build_api_server(config: &AppConfig) -> Result<ApiServer> {
    let storage_factory = create_storage_factory(&config.storage()).await?;
    let vendor_storage = Arc::new(storage_factory.create_vendor_storage());

    let vendor_service = Arc::new(VendorService::new(vendor_storage));

    Ok(ApiServer::new(vendor_service, config.server()))
}
