//! 配置管理模块
//!
//! 提供配置的加载、解析和管理功能。
//! 支持从 TOML 配置文件加载，也支持命令行参数覆盖。
//!
//! # 配置文件格式 (config.toml)
//!
//! ```toml
//! [resources]
//! root = "resources"
//! falloff_dir = "/Textures/Effects/Light"
//! filter = true
//! procedural_fallback = true
//! procedural_size = 64
//!
//! [logging]
//! level = "info"      # trace, debug, info, warn, error
//! file_output = false
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, Result};

/// 全局配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// 资源配置
    #[serde(default)]
    pub resources: ResourceConfig,

    /// 日志配置
    #[serde(default)]
    pub logging: LoggingConfig,

    /// 演示场景配置（命令行可覆盖）
    #[serde(default)]
    pub demo: DemoConfig,
}

/// 资源配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceConfig {
    /// 资源根目录（磁盘路径）
    #[serde(default = "default_root")]
    pub root: String,

    /// 衰减贴图所在的资源目录（资源路径，必须以 `/` 开头）
    #[serde(default = "default_falloff_dir")]
    pub falloff_dir: String,

    /// 导入时是否开启纹理过滤
    #[serde(default = "default_filter")]
    pub filter: bool,

    /// 磁盘上缺少衰减贴图时是否生成程序化贴图
    #[serde(default = "default_procedural_fallback")]
    pub procedural_fallback: bool,

    /// 程序化贴图边长（像素）
    #[serde(default = "default_procedural_size")]
    pub procedural_size: u32,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: LogLevel,

    /// 是否输出到文件
    #[serde(default = "default_file_output")]
    pub file_output: bool,

    /// 日志文件路径
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

/// 演示配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DemoConfig {
    /// 实体原型文件
    #[serde(default)]
    pub prototype: Option<String>,

    /// 快照脚本文件
    #[serde(default)]
    pub snapshots: Option<String>,
}

/// 日志级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            other => Err(ConfigError::InvalidValue {
                field: "logging.level".to_string(),
                reason: format!("unknown level '{}'", other),
            }),
        }
    }
}

// 默认值函数
fn default_root() -> String { "resources".to_string() }
fn default_falloff_dir() -> String { "/Textures/Effects/Light".to_string() }
fn default_filter() -> bool { true }
fn default_procedural_fallback() -> bool { true }
fn default_procedural_size() -> u32 { 64 }
fn default_log_level() -> LogLevel { LogLevel::Info }
fn default_file_output() -> bool { false }
fn default_log_file() -> String { "light_sync.log".to_string() }

impl Default for ResourceConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            falloff_dir: default_falloff_dir(),
            filter: default_filter(),
            procedural_fallback: default_procedural_fallback(),
            procedural_size: default_procedural_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file_output: default_file_output(),
            log_file: default_log_file(),
        }
    }
}

impl Config {
    /// 从配置文件加载
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path_str = path.as_ref().to_string_lossy().to_string();

        let contents = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound(path_str.clone()))?;

        Self::from_toml_str(&contents)
    }

    /// 从 TOML 字符串解析
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// 从配置文件加载，如果文件不存在则使用默认配置
    pub fn from_file_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::from_file(path).unwrap_or_default()
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let contents = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::ParseError(e.to_string()))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// 从命令行参数覆盖配置
    ///
    /// 支持的参数：
    /// - `--resources <dir>`: 资源根目录
    /// - `--log-level <level>`: 日志级别
    /// - `--prototype <file>`: 实体原型文件
    /// - `--snapshots <file>`: 快照脚本文件
    ///
    /// 无法解析的值会被忽略，保留原配置。
    pub fn apply_args<I>(&mut self, args: I)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let args: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

        let value_of = |flag: &str| -> Option<String> {
            args.iter()
                .position(|a| a == flag)
                .and_then(|idx| args.get(idx + 1))
                .cloned()
        };

        if let Some(root) = value_of("--resources") {
            self.resources.root = root;
        }

        if let Some(level) = value_of("--log-level") {
            if let Ok(level) = level.parse() {
                self.logging.level = level;
            }
        }

        if let Some(prototype) = value_of("--prototype") {
            self.demo.prototype = Some(prototype);
        }

        if let Some(snapshots) = value_of("--snapshots") {
            self.demo.snapshots = Some(snapshots);
        }
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        if self.resources.root.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "resources.root".to_string(),
                reason: "Resource root must not be empty".to_string(),
            }.into());
        }

        if !self.resources.falloff_dir.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                field: "resources.falloff_dir".to_string(),
                reason: "Resource paths must be rooted (start with '/')".to_string(),
            }.into());
        }

        if self.resources.procedural_size < 2 {
            return Err(ConfigError::InvalidValue {
                field: "resources.procedural_size".to_string(),
                reason: "Procedural textures need at least 2x2 pixels".to_string(),
            }.into());
        }

        Ok(())
    }
}
