//! Runtime configuration sourced from the environment.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `THRIFT_HAVEN_DATA_DIR` - Directory for persisted cart state (default: .thrift-haven)
//! - `THRIFT_HAVEN_CATALOG` - Path to a catalog TOML file (default: the built-in catalog)

use std::path::PathBuf;

use thiserror::Error;

/// Cart state lands here unless `THRIFT_HAVEN_DATA_DIR` says otherwise.
pub const DEFAULT_DATA_DIR: &str = ".thrift-haven";

/// Errors raised while reading the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Runtime settings for the storefront.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory for persisted cart state
    pub data_dir: PathBuf,
    /// Catalog file to load instead of the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl Config {
    /// Build the configuration from the process environment.
    ///
    /// A `.env` file in the working directory is folded in first when
    /// present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a blank value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // The .env file is optional.
        let _ = dotenvy::dotenv();

        let data_dir = match env_value("THRIFT_HAVEN_DATA_DIR")? {
            Some(dir) => PathBuf::from(dir),
            None => PathBuf::from(DEFAULT_DATA_DIR),
        };
        let catalog_path = env_value("THRIFT_HAVEN_CATALOG")?.map(PathBuf::from);

        Ok(Self {
            data_dir,
            catalog_path,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            catalog_path: None,
        }
    }
}

/// Read one environment variable.
///
/// An unset variable is simply absent, but a variable set to a blank string
/// is treated as a mistake in the caller's shell setup and errors out.
fn env_value(key: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(key) {
        Ok(value) if value.trim().is_empty() => Err(ConfigError::InvalidEnvVar(
            key.to_owned(),
            "must not be blank".to_owned(),
        )),
        Ok(value) => Ok(Some(value)),
        Err(_) => Ok(None),
    }
}
