pub mod app_config;
pub mod config;
pub mod i18n;
pub mod materials;
pub mod tiles;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use i18n::{format_date, translate, translate_or, translate_with, Locale};
pub use materials::{render_wishlist, MaterialDraft};
pub use tiles::{calculate as calculate_tiles, TileCalculation, TileError, TileInput};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
