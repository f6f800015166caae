//! Configuration loading and parsing for Mirage
//!
//! Provides functionality to load and parse `mirage.toml` configuration files.
//! Configuration only affects how files are picked and reported; the rule
//! library itself is fixed.

use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::issue::Severity;
use crate::language::Language;

pub const CONFIG_FILENAME: &str = "mirage.toml";

const KNOWN_TOP_LEVEL_KEYS: &[&str] = &["exclude", "scan", "check", "output"];
const KNOWN_SECTION_KEYS: &[(&str, &[&str])] = &[
    ("scan", &["language"]),
    ("check", &["min_score", "fail_on"]),
    ("output", &["format"]),
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid TOML in '{path}': {message}")]
    ParseError { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory names skipped during file discovery.
    pub exclude: Vec<String>,
    pub scan: ScanConfig,
    pub check: CheckConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ScanConfig {
    /// Pin every file to this language instead of inferring it.
    pub language: Option<Language>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct CheckConfig {
    pub min_score: Option<u32>,
    pub fail_on: Option<SeverityValue>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    pub format: Option<FormatValue>,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum SeverityValue {
    Critical,
    Warning,
    Info,
}

impl From<SeverityValue> for Severity {
    fn from(value: SeverityValue) -> Self {
        match value {
            SeverityValue::Critical => Severity::Critical,
            SeverityValue::Warning => Severity::Warning,
            SeverityValue::Info => Severity::Info,
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum FormatValue {
    Pretty,
    Text,
    Json,
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();
    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if !current.pop() {
            return None;
        }
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

fn parse_config(path: &Path, content: &str) -> Result<Config, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = read_config(path)?;
    parse_config(path, &content)
}

pub fn load_config_with_warnings(path: &Path) -> Result<ConfigResult, ConfigError> {
    let content = read_config(path)?;
    let config = parse_config(path, &content)?;
    let warnings = detect_unknown_keys(&content);

    for warning in &warnings {
        tracing::warn!(path = %path.display(), "{}", warning);
    }

    Ok(ConfigResult { config, warnings })
}

fn detect_unknown_keys(content: &str) -> Vec<String> {
    let mut warnings = Vec::new();

    let table: toml::Table = match content.parse() {
        Ok(t) => t,
        Err(_) => return warnings,
    };

    let known_top: HashSet<&str> = KNOWN_TOP_LEVEL_KEYS.iter().copied().collect();
    for key in table.keys() {
        if !known_top.contains(key.as_str()) {
            warnings.push(format!("Unknown config option: '{}'", key));
        }
    }

    for (section, known) in KNOWN_SECTION_KEYS {
        if let Some(toml::Value::Table(values)) = table.get(*section) {
            for key in values.keys() {
                if !known.contains(&key.as_str()) {
                    warnings.push(format!("Unknown config option in [{}]: '{}'", section, key));
                }
            }
        }
    }

    warnings
}

pub fn load_config_or_default_with_warnings(start_dir: &Path) -> ConfigResult {
    match find_config_file(start_dir) {
        Some(path) => load_config_with_warnings(&path).unwrap_or_else(|e| {
            tracing::warn!("{}", e);
            ConfigResult {
                config: Config::default(),
                warnings: vec![e.to_string()],
            }
        }),
        None => ConfigResult::default(),
    }
}
