use crate::config::{StorageConfig, StorageType};
use anyhow::Result;
use vnd_storage::memory::MemoryStorageFactory;

pub async fn create_storage_factory(
    config: &StorageConfig,
) -> Result<MemoryStorageFactory> {
    match config.storage_type {
        StorageType::Memory => Ok(MemoryStorageFactory),
    }
}
