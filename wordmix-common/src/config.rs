//! Configuration loading and resolution
//!
//! Settings are resolved in priority order:
//! 1. Command-line argument or environment variable (highest priority)
//! 2. TOML config file
//! 3. Compiled default (fallback)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

use crate::source::{WordSource, DEFAULT_OBJECT_NAME, DEFAULT_STORAGE_URL};
use crate::{Error, Result};

/// Port used when none is configured and the source allows a default
pub const DEFAULT_PORT: u16 = 8080;

/// Static asset directory used when none is configured
pub const DEFAULT_STATIC_DIR: &str = "static";

/// Contents of the optional `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TomlConfig {
    pub port: Option<u16>,
    pub debug: Option<bool>,
    pub static_dir: Option<PathBuf>,
    pub words: WordsConfig,
}

/// `[words]` table of the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WordsConfig {
    pub file: Option<PathBuf>,
    pub bucket: Option<String>,
    pub object: Option<String>,
    pub storage_url: Option<String>,
}

impl TomlConfig {
    /// Parse config file contents
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(format!("Invalid config file: {}", e)))
    }

    /// Load the config file.
    ///
    /// An explicitly given path must exist. Without one, the platform
    /// default location is tried and a missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|e| {
            Error::Config(format!("Cannot read config file {}: {}", path.display(), e))
        })?;
        debug!("Loaded config file {}", path.display());
        Self::parse(&content)
    }
}

/// Platform config file location (`~/.config/wordmix/config.toml` on Linux)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("wordmix").join("config.toml"))
}

/// Settings given on the command line or through the environment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub port: Option<u16>,
    pub debug: bool,
    pub static_dir: Option<PathBuf>,
    pub words_file: Option<PathBuf>,
    pub bucket: Option<String>,
    pub object: Option<String>,
    pub storage_url: Option<String>,
}

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub port: u16,
    pub debug: bool,
    pub static_dir: PathBuf,
    pub source: WordSource,
}

impl ServiceConfig {
    /// Merge overrides over the config file over compiled defaults.
    ///
    /// A bucket name selects the bucket source, otherwise a words file
    /// selects the file source, otherwise the embedded list is used. The
    /// bucket source has no default port: it must be configured.
    pub fn resolve(overrides: ConfigOverrides, file: TomlConfig) -> Result<Self> {
        let words = file.words;
        let bucket = non_empty(overrides.bucket).or_else(|| non_empty(words.bucket));
        let words_file = overrides.words_file.or(words.file);

        let source = if let Some(bucket) = bucket {
            WordSource::Bucket {
                base_url: non_empty(overrides.storage_url)
                    .or_else(|| non_empty(words.storage_url))
                    .unwrap_or_else(|| DEFAULT_STORAGE_URL.to_string()),
                bucket,
                object: non_empty(overrides.object)
                    .or_else(|| non_empty(words.object))
                    .unwrap_or_else(|| DEFAULT_OBJECT_NAME.to_string()),
            }
        } else if let Some(path) = words_file {
            WordSource::File(path)
        } else {
            WordSource::Embedded
        };

        let port = match (overrides.port.or(file.port), &source) {
            (Some(port), _) => port,
            (None, WordSource::Bucket { .. }) => {
                return Err(Error::Config(
                    "PORT must be set when reading words from a storage bucket".to_string(),
                ));
            }
            (None, _) => {
                warn!("No port configured, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        Ok(Self {
            port,
            debug: overrides.debug || file.debug.unwrap_or(false),
            static_dir: overrides
                .static_dir
                .or(file.static_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR)),
            source,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
