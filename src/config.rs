use crate::error::{GeoSpyError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_token: Option<String>,
    pub api_base: String,
    pub top_k: usize,
    pub timeout_seconds: u64,
    pub submit_interval_ms: u64,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| GeoSpyError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("geospy").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            api_token: None,
            api_base: "https://dev.geospy.ai".into(),
            top_k: 25,
            timeout_seconds: 60,
            submit_interval_ms: 1000,
        }
    }

    pub fn get_api_token(&self) -> Result<String> {
        // 環境変数を優先
        if let Ok(token) = std::env::var("GEOSPY_API_TOKEN") {
            return Ok(token);
        }

        self.api_token.clone().ok_or(GeoSpyError::MissingApiToken)
    }

    pub fn set_api_token(&mut self, token: String) -> Result<()> {
        self.api_token = Some(token);
        self.save()
    }

    pub fn set_api_base(&mut self, api_base: String) -> Result<()> {
        self.api_base = api_base;
        self.save()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
