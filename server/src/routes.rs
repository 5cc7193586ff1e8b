use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
};
use catalog::Product;
use serde_json::{Value, json};
use tracing::{debug, info};

use crate::{
    error::AppError,
    images::{image_urls, list_image_files, resolve_product_dir},
    state::AppState,
};

pub async fn products_handler(State(state): State<Arc<AppState>>) -> Json<Vec<Product>> {
    Json(state.catalog.clone())
}

pub async fn product_handler(
    State(state): State<Arc<AppState>>,
    Path(id): Path<u32>,
) -> Result<Json<Product>, AppError> {
    state
        .catalog
        .iter()
        .find(|product| product.id == id)
        .cloned()
        .map(Json)
        .ok_or(AppError::ProductNotFound)
}

/// Returns the list of image URLs for a given product folder name.
pub async fn images_handler(
    State(state): State<Arc<AppState>>,
    Path(product_name): Path<String>,
) -> Result<Json<Value>, AppError> {
    if product_name.trim().is_empty() {
        return Err(AppError::MissingProductName);
    }

    let images_root = &state.config.images_root;
    debug!(
        "Resolving product folder for '{product_name}' under {}",
        images_root.display()
    );

    let storage = |source| AppError::Storage {
        source,
        expose_details: state.config.expose_error_details,
    };

    let folder = resolve_product_dir(images_root, &product_name)
        .map_err(storage)?
        .ok_or_else(|| AppError::NoImages(product_name.clone()))?;

    let files = list_image_files(&images_root.join(&folder)).map_err(storage)?;
    let urls = image_urls(&folder, &files);

    info!(
        "Returning {} images for folder '{folder}' (requested '{product_name}')",
        urls.len()
    );

    Ok(Json(json!({ "images": urls })))
}
