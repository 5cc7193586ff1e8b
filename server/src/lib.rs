//! # Server
//!
//! HTTP backend for the storefront.
//!
//! ## Endpoints
//! - `GET /api/products`: full catalog snapshot
//! - `GET /api/products/{id}`: one product
//! - `GET /api/images/{product_name}`: image URLs for a product folder
//! - `GET /images/...`: the image files themselves, served statically
//!
//! ## Image folders
//! Product images live in one folder per product under `IMAGES_DIR_PATH`.
//! Folder names are whatever the import tool (or a human) created, so the
//! images endpoint resolves the requested product name against the live
//! directory listing instead of trusting it verbatim. See
//! [`catalog::resolver`] for the matching policy.
//!
//! The catalog is loaded once at startup and never reloaded; restart the
//! server after editing `products.json`.

use axum::{Router, routing::get};
use tower_http::services::ServeDir;
use tracing::info;

pub mod config;
pub mod error;
pub mod images;
pub mod routes;
pub mod state;

use routes::{images_handler, product_handler, products_handler};
use state::AppState;

pub async fn start_server() -> anyhow::Result<()> {
    let state = AppState::new()?;

    let app = Router::new()
        .route("/api/products", get(products_handler))
        .route("/api/products/{id}", get(product_handler))
        .route("/api/images/{product_name}", get(images_handler))
        .nest_service("/images", ServeDir::new(&state.config.images_root))
        .with_state(state.clone());

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", state.config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
