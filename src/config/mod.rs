use crate::global;
use crate::schema::TargetSchema;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub languages: LanguageConfig,
    pub audio: AudioConfig,
    pub dataset: DatasetConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Source language code (M4T langcode)
    pub source: String,
    /// Target language code (M4T langcode)
    pub target: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Sampling rate stamped into manifest samples and checked against wav
    /// headers during validation
    pub sampling_rate: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Default target schema for normalize/manifest runs
    pub schema: TargetSchema,
    /// Filename pattern for manifest input discovery ('*' wildcard)
    pub pattern: String,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            source: "eng".to_string(),
            target: "eng".to_string(),
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sampling_rate: 16000,
        }
    }
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            schema: TargetSchema::Seamless,
            pattern: "*.jsonl".to_string(),
        }
    }
}

impl Config {
    /// Load the config, honoring an explicit `--config` path when given.
    ///
    /// An explicit path must exist; the default path is created with defaults
    /// on first use.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file {}", path.display()))?;
                let config: Self =
                    toml::from_str(&content).context("Failed to parse config file")?;
                info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => Self::load(),
        }
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            config.save()?;
            return Ok(config);
        }

        let content =
            std::fs::read_to_string(&config_path).context("Failed to read config file")?;

        let config: Self = toml::from_str(&content).context("Failed to parse config file")?;

        info!("Loaded config from {:?}", config_path);
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&config_path, content).context("Failed to write config file")?;

        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        global::config_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.languages.source, "eng");
        assert_eq!(config.languages.target, "eng");
        assert_eq!(config.audio.sampling_rate, 16000);
        assert_eq!(config.dataset.schema, TargetSchema::Seamless);
        assert_eq!(config.dataset.pattern, "*.jsonl");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [dataset]
            schema = "whisper"
            "#,
        )
        .unwrap();
        assert_eq!(config.dataset.schema, TargetSchema::Whisper);
        assert_eq!(config.dataset.pattern, "*.jsonl");
        assert_eq!(config.audio.sampling_rate, 16000);
    }
}
