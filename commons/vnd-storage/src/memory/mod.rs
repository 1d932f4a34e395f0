use crate::traits::*;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;
use vnd_models::{Vendor, VendorId};

type MemoryStore<T> = Arc<RwLock<HashMap<String, T>>>;

#[derive(Clone, Default)]
pub struct MemoryVendorStorage {
    store: MemoryStore<Vendor>,
}

impl MemoryVendorStorage {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    fn assign_id(mut vendor: Vendor) -> (String, Vendor) {
        let id = match vendor.id.as_deref() {
            Some(id) => id.to_string(),
            None => {
                let id = VendorId::generate().into_inner();
                debug!(vendor_id = %id, "Assigned id to new vendor");
                vendor.id = Some(id.clone());
                id
            }
        };
        (id, vendor)
    }
}

#[async_trait]
impl StorageHealth for MemoryVendorStorage {
    async fn health(&self) -> StorageResult<()> {
        Ok(())
    }
}

#[async_trait]
impl VendorStorage for MemoryVendorStorage {
    async fn find_by_id(&self, id: &str) -> StorageResult<Option<Vendor>> {
        let store = self.store.read().await;
        Ok(store.get(id).cloned())
    }

    async fn find_all(&self) -> StorageResult<Vec<Vendor>> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn save(&self, vendor: Vendor) -> StorageResult<Vendor> {
        let (id, vendor) = Self::assign_id(vendor);
        let mut store = self.store.write().await;
        store.insert(id, vendor.clone());
        Ok(vendor)
    }

    async fn save_all(
        &self,
        vendors: Vec<Vendor>,
    ) -> StorageResult<Vec<Vendor>> {
        let mut store = self.store.write().await;
        let saved = vendors
            .into_iter()
            .map(|vendor| {
                let (id, vendor) = Self::assign_id(vendor);
                store.insert(id, vendor.clone());
                vendor
            })
            .collect();
        Ok(saved)
    }
}

pub struct MemoryStorageFactory;

impl StorageFactory for MemoryStorageFactory {
    type VendorStorage = MemoryVendorStorage;

    fn create_vendor_storage(&self) -> Self::VendorStorage {
        MemoryVendorStorage::new()
    }
}
