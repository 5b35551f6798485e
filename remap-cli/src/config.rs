//! `remap.toml` loading.
//!
//! ```toml
//! [output]
//! format = "json"
//! radix = "dec"
//!
//! [log]
//! level = "debug"
//!
//! [labels]
//! "0x04" = "A!"
//! ```
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::parse_code;

/// Looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "remap.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {message}")]
    FileRead { path: String, message: String },
    #[error("Failed to parse '{path}': {message}")]
    TomlParse { path: String, message: String },
    #[error("Invalid value '{value}' for '{field}', expected: {expected}")]
    InvalidValue {
        field: String,
        value: String,
        expected: String,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// How keycodes are printed in text output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Radix {
    #[default]
    Hex,
    Dec,
}

impl Radix {
    pub fn format(self, code: u32) -> String {
        match self {
            Radix::Hex => format!("{code:#06X}"),
            Radix::Dec => code.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default)]
    pub radix: Radix,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    pub level: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub log: LogConfig,
    /// Keycap label overrides, keycode -> label
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
}

impl CliConfig {
    /// Load the config from `path`, or from [`DEFAULT_CONFIG_FILE`] if it exists.
    ///
    /// An explicitly given file must exist; a missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> ConfigResult<(Self, Option<PathBuf>)> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    return Ok((Self::default(), None));
                }
                default
            }
        };
        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::FileRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml_str(&content, &path.display().to_string())?;
        Ok((config, Some(path)))
    }

    /// Parse config content. `origin` names the source in errors.
    pub fn from_toml_str(content: &str, origin: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::TomlParse {
            path: origin.to_string(),
            message: e.message().to_string(),
        })?;
        // Validate the values parsed lazily later on
        config.log_level()?;
        config.label_overrides()?;
        Ok(config)
    }

    pub fn log_level(&self) -> ConfigResult<Option<LevelFilter>> {
        self.log
            .level
            .as_deref()
            .map(|level| {
                LevelFilter::from_str(level).map_err(|_| ConfigError::InvalidValue {
                    field: "log.level".to_string(),
                    value: level.to_string(),
                    expected: "one of off, error, warn, info, debug, trace".to_string(),
                })
            })
            .transpose()
    }

    /// Label overrides keyed by keycode.
    pub fn label_overrides(&self) -> ConfigResult<BTreeMap<u16, String>> {
        self.labels
            .iter()
            .map(|(key, label)| {
                let code = parse_code(key)
                    .ok()
                    .and_then(|code| u16::try_from(code).ok())
                    .ok_or_else(|| ConfigError::InvalidValue {
                        field: format!("labels.{key}"),
                        value: key.clone(),
                        expected: "a keycode between 0 and 0xFFFF, decimal or 0x-prefixed hex".to_string(),
                    })?;
                Ok((code, label.clone()))
            })
            .collect()
    }
}
