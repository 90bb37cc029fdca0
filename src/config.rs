// Configuration module for chatpick
// Loads and persists the flat settings file (JSON) and exposes typed key access.

mod types;

pub use types::{ClipboardBackend, Config, ConfigKey, ConfigValue, DEFAULT_SYSTEM_PROMPT};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const CONFIG_DIR: &str = "chatpick";
const CONFIG_FILE: &str = "config.json";
const LEXICON_FILE: &str = "lexicon.json";

/// Errors raised while reading or writing the config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("value for '{key}' must be {expected}, got {actual}")]
    TypeMismatch {
        key: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("invalid clipboard backend '{0}' (expected auto, system or osc52)")]
    InvalidBackend(String),
}

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Returns the default directory holding config.json and lexicon.json
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_DIR)
}

/// Default path of the config file
pub fn default_config_path() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}

/// Default path of the lexicon file
pub fn default_lexicon_path() -> PathBuf {
    config_dir().join(LEXICON_FILE)
}

/// Loads configuration from `path`
/// Returns default configuration if file doesn't exist or on parse errors
pub fn load_config(path: &Path) -> ConfigResult {
    log::debug!("Loading config from {:?}", path);

    if !path.exists() {
        log::debug!("Config file does not exist, using defaults");
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            log::error!("Failed to read config file {:?}: {}", path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match parse_config(&contents) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => {
            log::error!("Failed to parse config file {:?}: {}", path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Parse the config file; only a JSON object is accepted
///
/// serde would also read the struct from a JSON array, field by field.
fn parse_config(contents: &str) -> Result<Config, serde_json::Error> {
    match serde_json::from_str::<serde_json::Value>(contents)? {
        map @ serde_json::Value::Object(_) => Config::deserialize(map),
        _ => Err(serde::de::Error::custom("expected a map of settings")),
    }
}

/// Writes `contents` to `path` via a sibling temp file and a rename,
/// so readers never observe a half-written file.
pub(crate) fn write_atomically(path: &Path, contents: &str) -> Result<(), ConfigError> {
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(io_err)?;
    }

    let tmp_path = path.with_extension("json.tmp");
    let result = fs::File::create(&tmp_path)
        .and_then(|mut file| {
            file.write_all(contents.as_bytes())?;
            file.sync_all()
        })
        .and_then(|()| fs::rename(&tmp_path, path));

    if result.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    result.map_err(io_err)
}

/// Config handle passed explicitly to the components that read settings.
///
/// Reads come from memory; every mutation persists the entire set.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    config: Config,
}

impl ConfigStore {
    /// Open the store at `path`, returning any load warning alongside it
    pub fn open(path: PathBuf) -> (Self, Option<String>) {
        let result = load_config(&path);
        (
            Self {
                path,
                config: result.config,
            },
            result.warning,
        )
    }

    /// Store backed by `path` with the given in-memory contents (nothing is written)
    pub fn with_config(path: PathBuf, config: Config) -> Self {
        Self { path, config }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read a single setting by key
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        self.config.get(key)
    }

    /// Update one setting and persist the whole config.
    ///
    /// The in-memory value is left untouched when the value has the wrong
    /// type or the write fails.
    pub fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<(), ConfigError> {
        let mut next = self.config.clone();
        next.set(key, value)?;
        self.replace(next)
    }

    /// Replace the whole config and persist it
    pub fn replace(&mut self, config: Config) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(&config)?;
        write_atomically(&self.path, &contents)?;
        log::info!("Saved config to {:?}", self.path);
        self.config = config;
        Ok(())
    }
}

impl Config {
    /// Current value of `key`
    pub fn get(&self, key: ConfigKey) -> ConfigValue {
        match key {
            ConfigKey::ApiKey => ConfigValue::Text(self.api_key.clone()),
            ConfigKey::BaseUrl => ConfigValue::Text(self.base_url.clone()),
            ConfigKey::Model => ConfigValue::Text(self.model.clone()),
            ConfigKey::SystemPrompt => ConfigValue::Text(self.system_prompt.clone()),
            ConfigKey::CustomModels => ConfigValue::List(self.custom_models.clone()),
            ConfigKey::UserName => ConfigValue::Text(self.user_name.clone()),
            ConfigKey::AiName => ConfigValue::Text(self.ai_name.clone()),
            ConfigKey::UsePresetDirections => ConfigValue::Flag(self.use_preset_directions),
            ConfigKey::EnableClipboardMonitor => ConfigValue::Flag(self.enable_clipboard_monitor),
            ConfigKey::ClipboardBackend => {
                ConfigValue::Text(self.clipboard_backend.as_str().to_string())
            }
        }
    }

    /// Type-check `value` and store it under `key` (in memory only)
    pub fn set(&mut self, key: ConfigKey, value: ConfigValue) -> Result<(), ConfigError> {
        let mismatch = |expected: &'static str, value: &ConfigValue| ConfigError::TypeMismatch {
            key: key.name(),
            expected,
            actual: value.kind(),
        };

        match (key, value) {
            (ConfigKey::ApiKey, ConfigValue::Text(v)) => self.api_key = v,
            (ConfigKey::BaseUrl, ConfigValue::Text(v)) => self.base_url = v,
            (ConfigKey::Model, ConfigValue::Text(v)) => self.model = v,
            (ConfigKey::SystemPrompt, ConfigValue::Text(v)) => self.system_prompt = v,
            (ConfigKey::UserName, ConfigValue::Text(v)) => self.user_name = v,
            (ConfigKey::AiName, ConfigValue::Text(v)) => self.ai_name = v,
            (ConfigKey::CustomModels, ConfigValue::List(v)) => self.custom_models = v,
            (ConfigKey::UsePresetDirections, ConfigValue::Flag(v)) => {
                self.use_preset_directions = v
            }
            (ConfigKey::EnableClipboardMonitor, ConfigValue::Flag(v)) => {
                self.enable_clipboard_monitor = v
            }
            (ConfigKey::ClipboardBackend, ConfigValue::Text(v)) => {
                self.clipboard_backend =
                    ClipboardBackend::parse(&v).ok_or(ConfigError::InvalidBackend(v))?
            }
            (ConfigKey::CustomModels, other) => return Err(mismatch("list", &other)),
            (ConfigKey::UsePresetDirections | ConfigKey::EnableClipboardMonitor, other) => {
                return Err(mismatch("flag", &other));
            }
            (_, other) => return Err(mismatch("text", &other)),
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
