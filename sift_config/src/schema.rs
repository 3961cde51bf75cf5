use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use sift_query::InterpreterConfig;
use tracing::info;

const APP_DIR: &str = "sift";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub interpreter: InterpreterConfig,
}

/// Where candidate records come from and how list columns are split.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DataConfig {
    #[serde(default = "DataConfig::default_path")]
    pub path: PathBuf,
    #[serde(default = "DataConfig::default_list_delimiter")]
    pub list_delimiter: char,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            list_delimiter: Self::default_list_delimiter(),
        }
    }
}

impl DataConfig {
    fn default_path() -> PathBuf {
        PathBuf::from("data/candidates.csv")
    }

    const fn default_list_delimiter() -> char {
        ';'
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    #[serde(default = "ServerConfig::default_host")]
    pub host: String,
    #[serde(default = "ServerConfig::default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl ServerConfig {
    fn default_host() -> String {
        "0.0.0.0".to_string()
    }

    const fn default_port() -> u16 {
        8000
    }

    #[must_use]
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join(APP_DIR))
    }

    pub fn default_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load `explicit` if given, otherwise `~/sift/config.json`.
    ///
    /// An explicit path must exist. A missing default file falls back to the
    /// built-in defaults.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = Self::default_path()?;
        if !path.exists() {
            info!(
                "No config file at {}, using defaults (run 'sift init' to create one)",
                path.display()
            );
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            anyhow::bail!("Config file not found at: {}", path.display());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    /// Write the default template to `~/sift/config.json`.
    pub fn create_config() -> anyhow::Result<PathBuf> {
        let config_path = Self::ensure_config_dir()?.join(CONFIG_FILE);
        Self::create_config_at(&config_path)?;
        Ok(config_path)
    }

    pub fn create_config_at(config_path: &Path) -> anyhow::Result<()> {
        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        std::fs::write(config_path, Self::default().to_pretty_json()?)?;
        info!("Created config file at {}", config_path.display());
        Ok(())
    }

    pub fn to_pretty_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"server": {"port": 9090}}"#)
            .expect("valid JSON should deserialize");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.data, DataConfig::default());
        assert_eq!(config.interpreter, InterpreterConfig::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_then_load_roundtrips_defaults() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("config.json");

        Config::create_config_at(&path).expect("template should be written");
        let loaded = Config::load_from(&path).expect("template should load");
        assert_eq!(loaded, Config::default());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_create_refuses_to_overwrite() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{}").expect("file should be written");

        assert!(Config::create_config_at(&path).is_err());
        assert_eq!(
            std::fs::read_to_string(&path).expect("file should be readable"),
            "{}"
        );
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let result = Config::load(Some(Path::new("/nonexistent/sift/config.json")));
        assert!(result.is_err());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_invalid_json_is_error() {
        let dir = TempDir::new().expect("temp dir should be created");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").expect("file should be written");

        let err = Config::load_from(&path).expect_err("broken file should be rejected");
        assert!(err.to_string().contains("Invalid config file"));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_interpreter_section_is_read() {
        let config: Config = serde_json::from_str(
            r#"{
                "data": {"path": "people.json", "list_delimiter": "|"},
                "interpreter": {
                    "optional_window": 12,
                    "extra_skills": [{"canonical": "elixir", "phrases": ["elixir"]}]
                }
            }"#,
        )
        .expect("valid JSON should deserialize");

        assert_eq!(config.data.path, PathBuf::from("people.json"));
        assert_eq!(config.data.list_delimiter, '|');
        assert_eq!(config.interpreter.optional_window, 12);
        assert_eq!(config.interpreter.extra_skills.len(), 1);
    }

    #[test]
    fn test_server_addr() {
        assert_eq!(ServerConfig::default().addr(), "0.0.0.0:8000");
    }
}
