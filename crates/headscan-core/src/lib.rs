pub mod app_config;
pub mod config;
pub mod headings;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use headings::{
    ExtractionMode, HeadingLevel, HeadingRecord, HeadingResult, Headings, FETCH_FAILED_MESSAGE,
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
