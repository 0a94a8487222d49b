// src/config.rs

use crate::error::ConfigError;
use crate::model::STORAGE_KEY;
use directories::{ProjectDirs, UserDirs};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "netiquette.yaml";
pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub model: String,
    pub endpoint: String,
    pub seed: i64,
    pub temperature: f32,
    pub cache_path: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    // Solo desde el entorno, nunca desde el YAML
    #[serde(skip)]
    pub api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            seed: 42,
            temperature: 0.7,
            cache_path: None,
            export_dir: None,
            api_key: None,
        }
    }
}

impl Config {
    /// Lee `.env`, el YAML opcional y la clave de la API del entorno
    pub fn load() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            log::debug!("no .env loaded: {e}");
        }

        let path = std::env::var_os("NETIQUETTE_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE));

        let mut config = if path.exists() {
            log::info!("loading config from {}", path.display());
            Self::from_yaml(&std::fs::read_to_string(&path)?)?
        } else {
            Self::default()
        };

        config.api_key = api_key_from_env();
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Fichero donde vive el set de escenarios
    pub fn cache_file(&self) -> PathBuf {
        let file_name = format!("{STORAGE_KEY}.json");
        if let Some(path) = &self.cache_path {
            return path.clone();
        }
        ProjectDirs::from("", "", "NetiquetteMaster")
            .map(|dirs| dirs.data_dir().join(&file_name))
            .unwrap_or_else(|| PathBuf::from(file_name))
    }

    /// Carpeta de "descargas" para los exports
    pub fn export_directory(&self) -> PathBuf {
        if let Some(dir) = &self.export_dir {
            return dir.clone();
        }
        UserDirs::new()
            .and_then(|dirs| dirs.download_dir().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn api_key_from_env() -> Option<String> {
    ["GEMINI_API_KEY", "API_KEY"]
        .iter()
        .filter_map(|name| std::env::var(name).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_yaml_gives_defaults() {
        let config = Config::from_yaml("  \n").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.seed, 42);
        assert_eq!(config.model, DEFAULT_MODEL);
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("temperature: 0.2\nexport_dir: /tmp/out\n").unwrap();
        assert_eq!(config.temperature, 0.2);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/out")));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn api_key_in_yaml_is_ignored() {
        let config = Config::from_yaml("api_key: secret\nseed: 7\n").unwrap();
        assert!(config.api_key.is_none());
        assert_eq!(config.seed, 7);
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        assert!(matches!(
            Config::from_yaml("seed: [not, a, number]"),
            Err(ConfigError::Yaml(_))
        ));
    }

    #[test]
    fn explicit_paths_win() {
        let config = Config {
            cache_path: Some(PathBuf::from("/data/set.json")),
            export_dir: Some(PathBuf::from("/data/out")),
            ..Config::default()
        };
        assert_eq!(config.cache_file(), PathBuf::from("/data/set.json"));
        assert_eq!(config.export_directory(), PathBuf::from("/data/out"));
    }

    #[test]
    fn default_cache_file_uses_storage_key() {
        let file = Config::default().cache_file();
        assert_eq!(
            file.file_name().and_then(|n| n.to_str()),
            Some("netiquette_master_scenarios_v1.json")
        );
    }
}
