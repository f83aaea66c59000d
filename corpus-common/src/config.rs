//! Configuration loading and data-root resolution

use crate::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Environment variable consulted when no data root is given on the
/// command line.
pub const DATA_ROOT_ENV: &str = "CORPUS_DATA_ROOT";

/// Bootstrap configuration loaded from TOML file
///
/// These settings cannot change during a run. A missing config file is not
/// an error; every field has a built-in default.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    /// Root folder receiving imported recordings (optional)
    ///
    /// If not specified, resolution falls through to the environment
    /// variable and then the OS-dependent default.
    #[serde(default)]
    pub data_root: Option<PathBuf>,

    /// Logging configuration (optional)
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl TomlConfig {
    /// Load the config file from the default platform location.
    ///
    /// A missing or unparsable file degrades to defaults with a warning
    /// rather than terminating the tool.
    pub fn load() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring config file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and parse a specific TOML config file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| Error::Config(e.to_string()))
    }
}

/// Resolve the corpus data root, in priority order:
/// 1. Command-line argument (highest priority)
/// 2. `CORPUS_DATA_ROOT` environment variable
/// 3. TOML config file `data_root` key
/// 4. OS-dependent compiled default (fallback)
pub fn resolve_data_root(cli_arg: Option<&Path>, config: &TomlConfig) -> PathBuf {
    if let Some(path) = cli_arg {
        return path.to_path_buf();
    }

    if let Ok(path) = std::env::var(DATA_ROOT_ENV) {
        return PathBuf::from(path);
    }

    if let Some(path) = &config.data_root {
        return path.clone();
    }

    default_data_root()
}

/// Default config file path for the platform (`<config dir>/corpus-mgr/config.toml`)
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("corpus-mgr").join("config.toml"))
}

/// OS-dependent default data root (`<local data dir>/corpus-mgr/data`)
pub fn default_data_root() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("corpus-mgr").join("data"))
        .unwrap_or_else(|| PathBuf::from("./data"))
}
