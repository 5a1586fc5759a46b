//  ____              _____
// |  _ \__      __   |  ___|__  _ __ __ _  ___
// | |_) \ \ /\ / /   | |_ / _ \| '__/ _` |/ _ \
// |  __/ \ V  V /    |  _| (_) | | | (_| |  __/
// |_|     \_/\_/     |_|  \___/|_|  \__, |\___|
//                                   |___/
//
// Author : Sidney Zhang <zly@lyzhang.me>
// Date : 2025-08-12
// Version : 0.1.0
// License : Mulan PSL v2
//
// Config Tools

use serde::{Serialize, Deserialize};
use std::{fs, path::{Path, PathBuf}};
use dirs::config_dir;
use log::debug;

use crate::charset::CharsetConfig;
use crate::error::{ConfigError, PassGenError};
use crate::setclip::DEFAULT_CLEAR_SECONDS;

pub const APP_DIR: &str = "pwforge";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub default_length: usize,
    pub default_count: usize,
    pub exclude_ambiguous: bool,
    pub require_all: bool,
    pub special_chars: Option<String>,
    pub url_safe: bool,
    pub clipboard_clear_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_length: 16,
            default_count: 1,
            exclude_ambiguous: false,
            require_all: true,
            special_chars: None,
            url_safe: false,
            clipboard_clear_seconds: DEFAULT_CLEAR_SECONDS,
        }
    }
}

impl AppConfig {
    /// 读取配置文件，文件不存在时返回默认配置
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("no config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = fs::File::create(path)?;
        serde_json::to_writer_pretty(file, self)?;
        Ok(())
    }

    /// Character tables for the generator. A custom special string wins over
    /// `url_safe`.
    pub fn charset_config(&self) -> Result<CharsetConfig, PassGenError> {
        match &self.special_chars {
            Some(special) => CharsetConfig::with_custom_special(special),
            None if self.url_safe => Ok(CharsetConfig::url_safe()),
            None => Ok(CharsetConfig::default()),
        }
    }
}

/// 获取配置目录
pub fn get_config_dir() -> Result<PathBuf, ConfigError> {
    match config_dir() {
        Some(path) => Ok(path.join(APP_DIR)),
        None => Err(ConfigError::ConfigDirError(
            "Could not determine configuration directory".to_string(),
        )),
    }
}

pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_config_dir()?.join(CONFIG_FILE))
}

/// `--config` wins, otherwise the platform config directory.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(path.to_path_buf()),
        None => default_config_path(),
    }
}
