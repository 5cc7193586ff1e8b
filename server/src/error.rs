use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("productName is required")]
    MissingProductName,

    #[error("No images found for product '{0}'")]
    NoImages(String),

    #[error("Product not found")]
    ProductNotFound,

    #[error("Failed to read images")]
    Storage {
        source: std::io::Error,
        expose_details: bool,
    },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::MissingProductName => {
                (StatusCode::BAD_REQUEST, json!({ "message": self.to_string() }))
            }

            AppError::NoImages(_) | AppError::ProductNotFound => {
                (StatusCode::NOT_FOUND, json!({ "message": self.to_string() }))
            }

            AppError::Storage {
                source,
                expose_details,
            } => {
                error!("Error reading product images: {source}");

                let mut body = json!({ "message": self.to_string() });
                if *expose_details {
                    body["details"] = json!({ "message": source.to_string() });
                }

                (StatusCode::INTERNAL_SERVER_ERROR, body)
            }
        };

        (status, Json(body)).into_response()
    }
}
