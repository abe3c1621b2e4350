use crate::error::{Result, ScanError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 空なら照会しない
    pub lookup_url: String,
    pub lookup_timeout_seconds: u64,
    pub extractor: String,
    pub extractor_args: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lookup_url: String::new(),
            lookup_timeout_seconds: 10,
            extractor: "wxapkg".into(),
            extractor_args: Vec::new(),
        }
    }
}

impl Config {
    /// 設定ファイルを読む。ファイルもホームもなければ既定値
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(config_path) => Self::load_from(&config_path),
            None => Ok(Self::default()),
        }
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

    /// 読めない設定ファイルは警告して既定値（scan/roots用）
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Some(config_path) => Self::load_from_or_default(&config_path),
            None => Self::default(),
        }
    }

    pub fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!(path = %config_path.display(), error = %e, "設定ファイルを読めないため既定値を使用");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| ScanError::Config("ホームディレクトリが見つかりません".into()))?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".config").join("wxapkg-scan").join("config.json"))
    }

    pub fn set_lookup_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ScanError::Config(format!("URLが不正です: {}", url)));
        }
        self.lookup_url = url;
        self.save()
    }

    pub fn set_extractor(&mut self, program: String) -> Result<()> {
        if program.trim().is_empty() {
            return Err(ScanError::Config("展開コマンドが空です".into()));
        }
        self.extractor = program;
        self.save()
    }
}
