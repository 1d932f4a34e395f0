use crate::{
    api::extractors::ApiJson, errors::ApiError, server::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::{error, info};
use vnd_models::{Vendor, VendorBatch, VendorPatch};

pub async fn list_vendors(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vendor>>, ApiError> {
    info!("API: Listing vendors");

    match state.vendor_service.list_vendors().await {
        Ok(vendors) => Ok(Json(vendors)),
        Err(e) => {
            error!("Failed to list vendors: {}", e);
            Err(e.into())
        }
    }
}

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vendor>, ApiError> {
    info!("API: Getting vendor: {}", id);

    state
        .vendor_service
        .get_vendor(&id)
        .await
        .map(Json)
        .map_err(Into::into)
}

pub async fn create_vendors(
    State(state): State<AppState>,
    ApiJson(batch): ApiJson<VendorBatch>,
) -> Result<(StatusCode, Json<Vec<Vendor>>), ApiError> {
    let vendors = batch.into_vec();
    info!("API: Creating {} vendor(s)", vendors.len());

    match state.vendor_service.create_vendors(vendors).await {
        Ok(saved) => Ok((StatusCode::CREATED, Json(saved))),
        Err(e) => {
            error!("Failed to create vendors: {}", e);
            Err(e.into())
        }
    }
}

pub async fn update_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(vendor): ApiJson<Vendor>,
) -> Result<Json<Vendor>, ApiError> {
    info!("API: Updating vendor: {}", id);

    match state.vendor_service.replace_vendor(&id, vendor).await {
        Ok(saved) => Ok(Json(saved)),
        Err(e) => {
            error!("Failed to update vendor {}: {}", id, e);
            Err(e.into())
        }
    }
}

pub async fn patch_vendor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(patch): ApiJson<VendorPatch>,
) -> Result<Json<Vendor>, ApiError> {
    info!("API: Patching vendor: {}", id);

    match state.vendor_service.patch_vendor(&id, patch).await {
        Ok(vendor) => Ok(Json(vendor)),
        Err(e) => {
            error!("Failed to patch vendor {}: {}", id, e);
            Err(e.into())
        }
    }
}
