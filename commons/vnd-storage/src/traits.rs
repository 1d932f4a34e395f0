use crate::error::StorageError;
use async_trait::async_trait;
use vnd_models::Vendor;

pub type StorageResult<T> = Result<T, StorageError>;

#[async_trait]
pub trait StorageHealth: Send + Sync {
    /// Lightweight connectivity check to the backing store.
    async fn health(&self) -> StorageResult<()>;
}

/// Keyed vendor persistence. Each call is atomic on its own; callers that
/// read, modify and write back get no isolation across calls.
#[async_trait]
pub trait VendorStorage: Send + Sync + StorageHealth {
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Vendor>>;
    async fn find_all(&self) -> StorageResult<Vec<Vendor>>;
    /// Insert or overwrite. A vendor without an id gets a fresh one; the
    /// stored record is returned.
    async fn save(&self, vendor: Vendor) -> StorageResult<Vendor>;
    /// Same as [`VendorStorage::save`] for every element, in order.
    async fn save_all(&self, vendors: Vec<Vendor>)
    -> StorageResult<Vec<Vendor>>;
}

pub trait StorageFactory {
    type VendorStorage: VendorStorage;

    fn create_vendor_storage(&self) -> Self::VendorStorage;
}
