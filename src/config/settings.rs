use crate::core::DigestEncoding;
use crate::error::{ChainError, Result};
use log::LevelFilter;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use std::sync::{PoisonError, RwLock};

pub static GLOBAL_CONFIG: Lazy<Config> = Lazy::new(Config::new);

static DEFAULT_LOG_LEVEL: &str = "info";

const DIGEST_ENCODING_KEY: &str = "DIGEST_ENCODING";
const LOG_LEVEL_KEY: &str = "LOG_LEVEL";

const DIGEST_ENCODING_ENV: &str = "TYPECHAIN_DIGEST_ENCODING";
const LOG_LEVEL_ENV: &str = "TYPECHAIN_LOG_LEVEL";

/// Settings accepted in a TOML config file
///
/// ```toml
/// digest_encoding = "delimited"
/// log_level = "debug"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub digest_encoding: Option<DigestEncoding>,
    pub log_level: Option<String>,
}

pub struct Config {
    inner: RwLock<HashMap<String, String>>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Config {
        let mut map = HashMap::new();
        map.insert(
            String::from(DIGEST_ENCODING_KEY),
            DigestEncoding::default().to_string(),
        );
        map.insert(String::from(LOG_LEVEL_KEY), String::from(DEFAULT_LOG_LEVEL));

        if let Ok(encoding) = env::var(DIGEST_ENCODING_ENV) {
            map.insert(String::from(DIGEST_ENCODING_KEY), encoding);
        }
        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            map.insert(String::from(LOG_LEVEL_KEY), level);
        }

        Config {
            inner: RwLock::new(map),
        }
    }

    fn get(&self, key: &str) -> Option<String> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner.get(key).cloned()
    }

    fn set(&self, key: &str, value: String) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        inner.insert(String::from(key), value);
    }

    pub fn get_digest_encoding(&self) -> Result<DigestEncoding> {
        match self.get(DIGEST_ENCODING_KEY) {
            Some(value) => value.parse(),
            None => Ok(DigestEncoding::default()),
        }
    }

    pub fn set_digest_encoding(&self, encoding: DigestEncoding) {
        self.set(DIGEST_ENCODING_KEY, encoding.to_string());
    }

    pub fn get_log_level(&self) -> Result<LevelFilter> {
        let value = self
            .get(LOG_LEVEL_KEY)
            .unwrap_or_else(|| String::from(DEFAULT_LOG_LEVEL));
        LevelFilter::from_str(&value)
            .map_err(|_| ChainError::Config(format!("Invalid log level: {value}")))
    }

    pub fn set_log_level(&self, level: LevelFilter) {
        self.set(LOG_LEVEL_KEY, level.to_string().to_lowercase());
    }

    /// Apply settings from a TOML file on top of the current values
    pub fn load_file(&self, path: &Path) -> Result<()> {
        let text = fs::read_to_string(path).map_err(|e| {
            ChainError::Config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let settings: FileSettings = toml::from_str(&text)?;
        self.apply(settings)
    }

    pub fn apply(&self, settings: FileSettings) -> Result<()> {
        if let Some(encoding) = settings.digest_encoding {
            self.set_digest_encoding(encoding);
        }
        if let Some(level) = settings.log_level {
            let level = LevelFilter::from_str(&level)
                .map_err(|_| ChainError::Config(format!("Invalid log level: {level}")))?;
            self.set_log_level(level);
        }
        Ok(())
    }
}
