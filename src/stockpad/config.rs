use crate::error::{Result, StockError};
use crate::model::DEFAULT_CURRENCY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "products.csv";

/// Settable configuration keys, spelled the way the `config` command takes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Currency,
    FileName,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 2] = [ConfigKey::Currency, ConfigKey::FileName];

    pub fn as_str(self) -> &'static str {
        match self {
            ConfigKey::Currency => "currency",
            ConfigKey::FileName => "file-name",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = StockError;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StockError::Validation(format!("Unknown config key: {}", s)))
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for stockpad, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockConfig {
    /// Label printed before prices (e.g. "Rp", "$", "EUR")
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Name of the catalog file inside the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

impl Default for StockConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            file_name: default_file_name(),
        }
    }
}

impl StockConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StockError::Io)?;
        let config: StockConfig =
            serde_json::from_str(&content).map_err(StockError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(StockError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(StockError::Serialization)?;
        fs::write(config_path, content).map_err(StockError::Io)?;
        Ok(())
    }

    /// Current value of `key`.
    pub fn get(&self, key: ConfigKey) -> &str {
        match key {
            ConfigKey::Currency => &self.currency,
            ConfigKey::FileName => &self.file_name,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: &str) -> Result<()> {
        match key {
            ConfigKey::Currency => {
                self.set_currency(value);
                Ok(())
            }
            ConfigKey::FileName => self.set_file_name(value),
        }
    }

    pub fn set_currency(&mut self, currency: &str) {
        self.currency = currency.trim().to_string();
    }

    /// Set the catalog file name. Must be a bare file name, not a path, and must not collide
    /// with the config file itself.
    pub fn set_file_name(&mut self, name: &str) -> Result<()> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StockError::Validation("file name cannot be empty".into()));
        }
        if name.contains('/') || name.contains('\\') || name == "." || name == ".." {
            return Err(StockError::Validation(format!(
                "file name must not be a path: {}",
                name
            )));
        }
        if name.eq_ignore_ascii_case(CONFIG_FILENAME) {
            return Err(StockError::Validation(format!(
                "{} is reserved for settings",
                CONFIG_FILENAME
            )));
        }
        self.file_name = name.to_string();
        Ok(())
    }

    /// Where the catalog lives inside `dir` under this config.
    pub fn catalog_path(&self, dir: &Path) -> PathBuf {
        dir.join(&self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = StockConfig::default();
        assert_eq!(config.currency, "Rp");
        assert_eq!(config.file_name, "products.csv");
    }

    #[test]
    fn test_set_file_name_rejects_paths() {
        let mut config = StockConfig::default();
        assert!(config.set_file_name("../escape.csv").is_err());
        assert!(config.set_file_name("   ").is_err());
        config.set_file_name(" stock.csv ").unwrap();
        assert_eq!(config.file_name, "stock.csv");
    }

    #[test]
    fn test_set_file_name_rejects_config_file() {
        let mut config = StockConfig::default();
        assert!(matches!(
            config.set_file_name("config.json"),
            Err(StockError::Validation(_))
        ));
        assert!(config.set_file_name("CONFIG.JSON").is_err());
        assert_eq!(config.file_name, "products.csv");
    }

    #[test]
    fn test_get_and_set_by_key() {
        let mut config = StockConfig::default();
        let key: ConfigKey = "Currency".parse().unwrap();
        config.set(key, "USD").unwrap();
        assert_eq!(config.get(ConfigKey::Currency), "USD");
        assert_eq!("file-name".parse::<ConfigKey>().unwrap(), ConfigKey::FileName);
        assert!("colour".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = StockConfig::load(dir.path()).unwrap();
        assert_eq!(config, StockConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data");

        let mut config = StockConfig::default();
        config.set_currency("$");
        config.save(&nested).unwrap();

        let loaded = StockConfig::load(&nested).unwrap();
        assert_eq!(loaded.currency, "$");
        assert_eq!(loaded.file_name, "products.csv");
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let parsed: StockConfig = serde_json::from_str(r#"{"currency":"EUR"}"#).unwrap();
        assert_eq!(parsed.currency, "EUR");
        assert_eq!(parsed.file_name, "products.csv");
    }
}
