//! Configuration management for appkit
//!
//! The config file is TOML with an optional `[logging]` table and an
//! optional `[variants]` table mapping set names to weighted entries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;
use crate::variants::WeightedVariants;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingSection,
    #[serde(default)]
    pub variants: BTreeMap<String, Vec<VariantEntry>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub format: LogFormat,
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantEntry {
    pub value: String,
    pub weight: f64,
}

impl Config {
    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            variant_sets = config.variants.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::ParseError)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weights that could never take part in a draw.
    fn validate(&self) -> Result<()> {
        for (set, entries) in &self.variants {
            for entry in entries {
                if !entry.weight.is_finite() || entry.weight < 0.0 {
                    return Err(ConfigError::InvalidWeight {
                        set: set.clone(),
                        value: entry.value.clone(),
                        weight: entry.weight,
                    }
                    .into());
                }
            }
        }
        Ok(())
    }

    /// Build the named variant set.
    pub fn variant_set(&self, name: &str) -> Result<WeightedVariants<String>> {
        let entries = self
            .variants
            .get(name)
            .ok_or_else(|| ConfigError::MissingField(format!("variants.{}", name)))?;

        Ok(entries
            .iter()
            .map(|entry| (entry.value.clone(), entry.weight))
            .collect())
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("APPKIT_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("appkit").join("config.toml"))
}
