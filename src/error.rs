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
// Error types

use std::fmt;

/// 密码生成过程中的错误
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassGenError {
    /// 约束无法满足：未启用字符类、字符池为空、长度不足等
    Configuration(String),
    /// 安全随机源不可用或读取失败
    EntropySource(String),
}

impl PassGenError {
    pub fn configuration(msg: impl Into<String>) -> Self {
        PassGenError::Configuration(msg.into())
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, PassGenError::Configuration(_))
    }

    pub fn is_entropy_source(&self) -> bool {
        matches!(self, PassGenError::EntropySource(_))
    }
}

impl fmt::Display for PassGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PassGenError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            PassGenError::EntropySource(msg) => write!(f, "Entropy source error: {}", msg),
        }
    }
}

impl std::error::Error for PassGenError {}

/// 配置文件读写错误
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    JsonError(serde_json::Error),
    ConfigDirError(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::JsonError(e) => write!(f, "JSON error: {}", e),
            ConfigError::ConfigDirError(msg) => write!(f, "Config directory error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError(e) => Some(e),
            ConfigError::JsonError(e) => Some(e),
            ConfigError::ConfigDirError(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::JsonError(e)
    }
}
