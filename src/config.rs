use crate::cli::OutputFormat;
use crate::error::{CoopMenuError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 식당名の上書き用環境変数
pub const CAFETERIA_ENV: &str = "COOP_MENU_CAFETERIA";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_cafeteria: Option<String>,
    pub default_format: OutputFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_cafeteria: None,
            default_format: OutputFormat::Tsv,
        }
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
            Ok(Self::default())
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
            .ok_or_else(|| CoopMenuError::Config("홈 디렉터리를 찾을 수 없습니다".into()))?;
        Ok(home.join(".config").join("coop-menu").join("config.json"))
    }

    /// 식당名（環境変数を優先）
    pub fn cafeteria(&self) -> Option<String> {
        if let Ok(name) = std::env::var(CAFETERIA_ENV) {
            if !name.trim().is_empty() {
                return Some(name);
            }
        }

        self.default_cafeteria.clone()
    }

    pub fn set_cafeteria(&mut self, name: String) -> Result<()> {
        self.default_cafeteria = Some(name);
        self.save()
    }

    pub fn set_format(&mut self, format: OutputFormat) -> Result<()> {
        self.default_format = format;
        self.save()
    }
}
