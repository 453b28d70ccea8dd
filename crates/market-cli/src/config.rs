//! CLI configuration
//!
//! Sources, lowest precedence first:
//! 1. built-in defaults
//! 2. TOML file (`--config`, or `market.toml` in the working directory)
//! 3. environment, including a `.env` file: `MARKET_DATABASE_PATH`,
//!    `MARKET_LOG_PROFILE`
//! 4. command line flags

use std::path::{Path, PathBuf};

use market_core::logging_facility::Profile;
use market_core::{ExError, ExErrorKind, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_FILE: &str = "market.toml";
pub const ENV_DATABASE_PATH: &str = "MARKET_DATABASE_PATH";
pub const ENV_LOG_PROFILE: &str = "MARKET_LOG_PROFILE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub database_path: PathBuf,
    pub log_profile: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(".market/market.db"),
            log_profile: "development".to_string(),
        }
    }
}

fn config_error(message: String) -> ExError {
    ExError::new(ExErrorKind::Config)
        .with_op("load_config")
        .with_message(message)
}

impl AppConfig {
    /// Parse a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            ExError::new(ExErrorKind::Io)
                .with_op("load_config")
                .with_entity_id(path.display().to_string())
                .with_message(e.to_string())
        })?;
        toml::from_str(&text)
            .map_err(|e| config_error(format!("{}: {}", path.display(), e)))
    }

    /// Overlay values from an environment lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(ENV_DATABASE_PATH).filter(|v| !v.trim().is_empty()) {
            self.database_path = PathBuf::from(path);
        }
        if let Some(profile) = lookup(ENV_LOG_PROFILE).filter(|v| !v.trim().is_empty()) {
            self.log_profile = profile;
        }
    }

    /// The logging profile named by `log_profile`
    pub fn profile(&self) -> Result<Profile> {
        self.log_profile
            .parse()
            .map_err(|e: market_core::MarketError| config_error(e.to_string()))
    }

    /// Resolve the configuration from every source
    ///
    /// An explicitly named config file must exist; the default one is
    /// optional.
    pub fn load(config_file: Option<&Path>, db_override: Option<PathBuf>) -> Result<Self> {
        let _ = dotenvy::dotenv();

        let mut config = match config_file {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?
            }
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        if let Some(path) = db_override {
            config.database_path = path;
        }

        config.profile()?;
        tracing::debug!(database_path = %config.database_path.display(), "configuration loaded");
        Ok(config)
    }
}
