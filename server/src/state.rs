use std::sync::Arc;

use catalog::{Product, load_catalog};
use tracing::info;

use super::config::Config;

pub struct AppState {
    pub config: Config,
    pub catalog: Vec<Product>,
}

impl AppState {
    pub fn new() -> anyhow::Result<Arc<Self>> {
        let config = Config::load();

        let catalog = load_catalog(&config.products_path)?;
        info!(
            "Loaded {} products from {}",
            catalog.len(),
            config.products_path.display()
        );

        Ok(Arc::new(Self { config, catalog }))
    }
}
