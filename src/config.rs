//! Engine settings read from the platform config directory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::infra::store::{FileStore, StoreError};
use crate::util::format::{format_currency, Currency};

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "FreightQuote";
const APP_NAME: &str = "FreightQuoteEngine";
const CONFIG_FILENAME: &str = "config.json";

pub const CURRENCY_ENV: &str = "FREIGHT_QUOTE_CURRENCY";
pub const DEFAULT_KRW_PER_USD: f64 = 1350.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("malformed config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Currency amounts are shown in; quotes are always priced in USD.
    pub display_currency: Currency,
    pub krw_per_usd: f64,
    /// Overrides where the quote history is stored.
    pub data_dir: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            display_currency: Currency::Usd,
            krw_per_usd: DEFAULT_KRW_PER_USD,
            data_dir: None,
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.krw_per_usd.is_finite() || self.krw_per_usd <= 0.0 {
            return Err(ConfigError::Invalid {
                field: "krwPerUsd",
                reason: format!("expected a positive rate, got {}", self.krw_per_usd),
            });
        }
        Ok(())
    }

    /// Applies `FREIGHT_QUOTE_CURRENCY` when it names a known currency.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(value) = std::env::var(CURRENCY_ENV) {
            match Currency::parse(&value) {
                Some(currency) => self.display_currency = currency,
                None => warn!("[config] ignoring {CURRENCY_ENV}={value}: expected USD or KRW"),
            }
        }
        self
    }

    pub fn format_amount(&self, amount_usd: f64) -> String {
        format_currency(amount_usd, self.display_currency, self.krw_per_usd)
    }

    /// File store for history: `data_dir` when set, else the platform default.
    pub fn history_store(&self) -> Result<FileStore, StoreError> {
        match &self.data_dir {
            Some(dir) => Ok(FileStore::new(dir.clone())),
            None => FileStore::default_location(),
        }
    }
}

fn config_file() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

/// Reads and validates one config file.
pub fn load_config_from(path: &Path) -> Result<EngineConfig, ConfigError> {
    let raw = fs::read_to_string(path)?;
    EngineConfig::from_json_str(&raw)
}

/// Loads the config file, falling back to defaults when it is missing or
/// unusable. Environment overrides apply either way.
pub fn load_config() -> EngineConfig {
    let Some(path) = config_file() else {
        debug!("[config] no config directory on this platform; using defaults");
        return EngineConfig::default().with_env_overrides();
    };

    let config = match load_config_from(&path) {
        Ok(config) => config,
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            debug!("[config] no config at {}; using defaults", path.display());
            EngineConfig::default()
        }
        Err(err) => {
            warn!("[config] {}: {err}; using defaults", path.display());
            EngineConfig::default()
        }
    };
    config.with_env_overrides()
}
