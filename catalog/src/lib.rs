//! # Catalog
//!
//! Shared product data for the storefront.
//!
//! The catalog lives in a single `products.json` file and is loaded once into
//! an immutable snapshot. Nothing in this crate mutates it afterwards: the
//! server keeps one snapshot for its lifetime, the batch tools load a fresh
//! one per run. Keeping the snapshot explicit (passed in, never a global)
//! means the resolver stays a plain function that is trivial to test.
//!
//! ## Schema
//! - `id` (**int**): stable product id, used in frontend routes
//! - `sku` (**string**): vendor sku, may be empty
//! - `name` (**string**): display name, doubles as the image folder name
//! - `category` (**string**)
//! - `description` (**string**)
//! - `features` (**list of strings**, optional in the file)

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod resolver;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: u32,
    pub sku: String,
    pub name: String,
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub features: Vec<String>,
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog at {path}: {source}")]
    Unreadable {
        path: String,
        source: std::io::Error,
    },

    #[error("malformed catalog at {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<Product>, CatalogError> {
    let path = path.as_ref();

    let raw = fs::read_to_string(path).map_err(|source| CatalogError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CatalogError::Malformed {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_features_default_to_empty() {
        let product: Product = serde_json::from_str(
            r#"{
                "id": 1,
                "sku": "MBP-16",
                "name": "MacBook Pro 16",
                "category": "Laptops",
                "description": "16-inch laptop"
            }"#,
        )
        .unwrap();

        assert!(product.features.is_empty());
    }

    #[test]
    fn test_missing_catalog_is_unreadable() {
        let err = load_catalog("does-not-exist.json").unwrap_err();

        assert!(matches!(err, CatalogError::Unreadable { .. }));
    }
}
