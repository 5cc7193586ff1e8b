use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

pub struct Config {
    pub port: u16,
    pub images_root: PathBuf,
    pub products_path: PathBuf,
    pub expose_error_details: bool,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("RUST_PORT", "5000"),
            images_root: PathBuf::from(try_load::<String>("IMAGES_DIR_PATH", "images")),
            products_path: PathBuf::from(try_load::<String>("PRODUCTS_PATH", "products.json")),
            expose_error_details: try_load("EXPOSE_ERROR_DETAILS", "false"),
        }
    }
}

fn var(key: &str) -> Result<String, ()> {
    env::var(key).map_err(|_| {
        warn!("Environment variable {key} not found, using default");
    })
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
        })
        .expect("Environment misconfigured!")
}
