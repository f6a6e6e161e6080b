//! User preferences and the on-disk layout of the wallet data directory.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use dirs::home_dir;
use serde::{Deserialize, Serialize};

use crate::currency::{LocaleConfig, LocaleFormatter, NegativeStyle};
use crate::errors::ConfigError;
use crate::storage::DEFAULT_STATEMENT_KEY;
use crate::utils::persistence::write_atomic;

pub const HOME_ENV: &str = "WALLET_HOME";
const DEFAULT_DIR_NAME: &str = ".wallet";
const CONFIG_FILE: &str = "config.json";
const STORE_DIR: &str = "store";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub currency_symbol: String,
    pub locale: LocaleConfig,
    pub negative_style: NegativeStyle,
    pub storage_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency_symbol: "$".into(),
            locale: LocaleConfig::default(),
            negative_style: NegativeStyle::Sign,
            storage_key: DEFAULT_STATEMENT_KEY.into(),
        }
    }
}

impl Config {
    pub fn formatter(&self) -> LocaleFormatter {
        LocaleFormatter::new(
            self.currency_symbol.clone(),
            self.locale.clone(),
            self.negative_style,
        )
    }
}

/// Returns the data directory, `$WALLET_HOME` or `~/.wallet`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the statement byte store under `base`.
pub fn store_dir_in(base: &Path) -> PathBuf {
    base.join(STORE_DIR)
}

/// Loads and saves [`Config`] as pretty JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
            base,
        })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file means defaults; a malformed file is an error.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, json.as_bytes())?;
        Ok(())
    }
}
