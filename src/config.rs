//! 配置文件加载
//!
//! 配置文件为 TOML 格式，默认位于 `<config_dir>/aqdash/config.toml`。
//! 文件不存在时使用默认配置。

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::chart::MIN_BAR_PERCENT;
use crate::error::{AppError, AppResult};
use crate::models::{AirQualityReading, HISTORY_LEN, seed_readings};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// 非空时替换内置城市列表
    #[serde(default)]
    pub cities: Vec<AirQualityReading>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub dark_mode: bool,

    #[serde(default = "default_min_bar_percent")]
    pub min_bar_percent: f64,
}

fn default_min_bar_percent() -> f64 {
    MIN_BAR_PERCENT
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            dark_mode: false,
            min_bar_percent: default_min_bar_percent(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

impl Config {
    /// 从 TOML 文件加载，文件不存在时返回默认配置
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> AppResult<Self> {
        let mut config: Config = toml::from_str(content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.ui.min_bar_percent = config.ui.min_bar_percent.clamp(0.0, 100.0);

        // 配置中的城市与内置城市一样需要完整的历史序列
        if let Some(reading) = config.cities.iter().find(|r| r.history.len() != HISTORY_LEN) {
            tracing::warn!(city = %reading.city, len = reading.history.len(), "rejecting config city");
            return Err(AppError::InvalidHistory {
                city: reading.city.clone(),
                len: reading.history.len(),
                expected: HISTORY_LEN,
            });
        }

        Ok(config)
    }

    /// 启动时的城市列表
    pub fn seed(&self) -> Vec<AirQualityReading> {
        if self.cities.is_empty() {
            seed_readings()
        } else {
            self.cities.clone()
        }
    }
}

/// 默认配置文件路径
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("aqdash").join("config.toml"))
}

/// 获取数据目录 (~/.local/share/aqdash/)，不存在时创建
pub fn data_dir() -> AppResult<PathBuf> {
    let dir = dirs::data_dir().ok_or(AppError::NoDataDir)?.join("aqdash");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
