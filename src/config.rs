use crate::error::{CandidateSearchError, Result};
use candidate_search_common::{OperationPolicies, DEFAULT_PAGE_SIZE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// 接続先を上書きする環境変数
pub const BASE_URL_ENV: &str = "CANDIDATE_SEARCH_URL";

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub page_size: usize,
    pub policies: OperationPolicies,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default_config())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CandidateSearchError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("candidate-search").join("config.json"))
    }

    fn default_config() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            page_size: DEFAULT_PAGE_SIZE,
            policies: OperationPolicies::default(),
        }
    }

    /// 接続先（環境変数を優先）
    pub fn base_url(&self) -> String {
        match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => url.trim().to_string(),
            _ => self.base_url.clone(),
        }
    }

    pub fn set_base_url(&mut self, url: &str) -> Result<()> {
        let parsed = Url::parse(url.trim())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CandidateSearchError::Config(format!(
                "http/https以外のURLは使えません: {}",
                parsed
            )));
        }
        self.base_url = parsed.to_string();
        Ok(())
    }
}
