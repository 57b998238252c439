pub mod app_config;
pub mod catalog;
pub mod config;

pub use app_config::{AppConfig, Environment};
pub use catalog::{catalog, load_catalog, CatalogError, Coordinates, TryoutRecord};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
