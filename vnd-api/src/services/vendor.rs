use crate::errors::VendorError;
use std::sync::Arc;
use tracing::{debug, info};
use vnd_models::{Vendor, VendorPatch, merge};
use vnd_storage::VendorStorage;

pub struct VendorService {
    storage: Arc<dyn VendorStorage>,
}

impl VendorService {
    pub fn new(storage: Arc<dyn VendorStorage>) -> Self {
        Self { storage }
    }

    pub async fn health(&self) -> Result<(), VendorError> {
        self.storage.health().await.map_err(Into::into)
    }

    pub async fn list_vendors(&self) -> Result<Vec<Vendor>, VendorError> {
        info!("Listing vendors");
        Ok(self.storage.find_all().await?)
    }

    pub async fn get_vendor(&self, id: &str) -> Result<Vendor, VendorError> {
        info!("Getting vendor: {}", id);
        self.storage
            .find_by_id(id)
            .await?
            .ok_or_else(|| VendorError::NotFound(id.to_string()))
    }

    pub async fn create_vendors(
        &self,
        vendors: Vec<Vendor>,
    ) -> Result<Vec<Vendor>, VendorError> {
        info!("Creating {} vendor(s)", vendors.len());
        Ok(self.storage.save_all(vendors).await?)
    }

    /// Full update. The path key replaces whatever id the body carried; the
    /// record is written whether or not it existed before.
    pub async fn replace_vendor(
        &self,
        id: &str,
        mut vendor: Vendor,
    ) -> Result<Vendor, VendorError> {
        info!("Replacing vendor: {}", id);
        vendor.id = Some(id.to_string());
        Ok(self.storage.save(vendor).await?)
    }

    /// Partial update. Saves only when the merge actually changed a field,
    /// otherwise hands back the stored record untouched.
    pub async fn patch_vendor(
        &self,
        id: &str,
        patch: VendorPatch,
    ) -> Result<Vendor, VendorError> {
        info!("Patching vendor: {}", id);
        let existing = self.get_vendor(id).await?;

        let merged = merge(&existing, &patch);
        if !merged.changed {
            debug!(vendor_id = %id, "Patch has no changes, skipping save");
            return Ok(existing);
        }

        let saved = self.storage.save(merged.vendor).await?;
        info!("Vendor patched successfully: {}", id);
        Ok(saved)
    }
}
