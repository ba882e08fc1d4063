use ai::EmbeddingConfig;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use summarizer::SummarizerConfig;
use tracing::{debug, info};

/// Полная конфигурация приложения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub embedding: EmbeddingConfig,
    pub summarizer: SummarizerConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        self.embedding
            .validate()
            .context("Invalid [embedding] configuration")?;
        self.summarizer
            .validate()
            .context("Invalid [summarizer] configuration")?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Default,
}

pub struct ConfigLoader {
    explicit_path: Option<PathBuf>,
    config_paths: Vec<PathBuf>,
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            explicit_path: None,
            config_paths: Self::default_config_paths(),
            env_prefix: "SUMMARIZE_".to_string(),
        }
    }

    /// Явно указанный файл; если его нет - это ошибка
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.explicit_path = Some(path);
        self
    }

    /// Заменить список путей поиска
    pub fn with_search_paths(mut self, paths: Vec<PathBuf>) -> Self {
        self.config_paths = paths;
        self
    }

    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("summarize.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("summarize").join("config.toml"));
        }
        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".summarize.toml"));
        }

        paths
    }

    /// Defaults → файл → переменные окружения
    pub fn load(&self) -> Result<(AppConfig, ConfigSource)> {
        let (config, source) = self.load_file_layer()?;
        let config = self.apply_overrides(config, |key| std::env::var(key).ok())?;
        Ok((config, source))
    }

    fn load_file_layer(&self) -> Result<(AppConfig, ConfigSource)> {
        if let Some(path) = &self.explicit_path {
            if !path.exists() {
                return Err(anyhow!("Config file not found: {}", path.display()));
            }
            let config = Self::load_file(path)?;
            info!("Loaded configuration from: {}", path.display());
            return Ok((config, ConfigSource::File(path.clone())));
        }

        // Берём первый найденный файл
        for path in &self.config_paths {
            if path.exists() {
                let config = Self::load_file(path)?;
                info!("Loaded configuration from: {}", path.display());
                return Ok((config, ConfigSource::File(path.clone())));
            }
        }

        debug!("No config file found, using defaults");
        Ok((AppConfig::default(), ConfigSource::Default))
    }

    pub fn load_file(path: &Path) -> Result<AppConfig> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))
    }

    /// Применить переопределения `{prefix}ENDPOINT`, `MODEL`, `FRACTION`, `BATCH_SIZE`
    pub fn apply_overrides<F>(&self, mut config: AppConfig, lookup: F) -> Result<AppConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{}{}", self.env_prefix, name));

        if let Some(endpoint) = var("ENDPOINT") {
            debug!("Override embedding.endpoint from environment");
            config.embedding.endpoint = endpoint;
        }
        if let Some(model) = var("MODEL") {
            debug!("Override embedding.model_name from environment");
            config.embedding.model_name = model;
        }
        if let Some(fraction) = var("FRACTION") {
            config.summarizer.top_fraction = fraction
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}FRACTION: {fraction}", self.env_prefix))?;
        }
        if let Some(batch_size) = var("BATCH_SIZE") {
            config.embedding.batch_size = batch_size
                .trim()
                .parse()
                .with_context(|| format!("Invalid {}BATCH_SIZE: {batch_size}", self.env_prefix))?;
        }

        Ok(config)
    }
}
