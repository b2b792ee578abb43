//! 错误处理模块
//!
//! 定义了 light_sync 中使用的统一错误类型。
//!
//! # 设计原则
//!
//! - 为每种错误类型提供清晰的上下文信息
//! - 支持错误链（error source）
//! - 易于模式匹配和错误处理
//! - 区分可恢复错误与致命的资源配置错误

use std::fmt;
use std::path::PathBuf;

use crate::component::LifecycleStage;

/// 统一的 Result 类型
pub type Result<T> = std::result::Result<T, LightSyncError>;

/// light_sync 的错误类型
#[derive(Debug)]
pub enum LightSyncError {
    /// 配置错误
    Config(ConfigError),

    /// 组件生命周期顺序错误
    Lifecycle(LifecycleError),

    /// 资源加载 / 解析错误
    Resource(ResourceError),

    /// 组件数据序列化错误
    Serialization(SerializationError),

    /// 网络状态路由错误
    State(String),

    /// IO 错误
    Io(std::io::Error),
}

/// 配置相关的错误
#[derive(Debug)]
pub enum ConfigError {
    /// 配置文件未找到
    FileNotFound(String),

    /// 配置文件解析失败
    ParseError(String),

    /// 配置值无效
    InvalidValue { field: String, reason: String },
}

/// 生命周期相关的错误
///
/// 组件在 `Created → Bound → Active → Detached` 之间迁移，
/// 越级或倒序的调用都会得到这里的错误，而不是未定义行为。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecycleError {
    /// 光源句柄尚未获取（还没有执行绑定）
    NotBound { operation: &'static str },

    /// 组件已经分离
    Detached { operation: &'static str },

    /// 非法的阶段迁移
    InvalidTransition {
        from: LifecycleStage,
        to: LifecycleStage,
    },
}

/// 资源相关的错误
#[derive(Debug)]
pub enum ResourceError {
    /// 资源缺失（资源供给契约被破坏，致命）
    MissingAsset(String),

    /// 资源文件加载失败
    LoadFailed { path: PathBuf, reason: String },
}

/// 序列化相关的错误
#[derive(Debug)]
pub enum SerializationError {
    /// 字段类型与期望不符
    InvalidField { key: String, reason: String },

    /// 写出时值无法转换为 TOML
    Unrepresentable { key: String, reason: String },

    /// 文档整体解析失败
    ParseError(String),
}

impl ResourceError {
    /// 是否为致命错误（不可重试）
    pub fn is_fatal(&self) -> bool {
        matches!(self, ResourceError::MissingAsset(_))
    }
}

impl LightSyncError {
    /// 是否为致命错误
    pub fn is_fatal(&self) -> bool {
        match self {
            LightSyncError::Resource(e) => e.is_fatal(),
            _ => false,
        }
    }
}

impl fmt::Display for LightSyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LightSyncError::Config(e) => write!(f, "Configuration error: {}", e),
            LightSyncError::Lifecycle(e) => write!(f, "Lifecycle error: {}", e),
            LightSyncError::Resource(e) => write!(f, "Resource error: {}", e),
            LightSyncError::Serialization(e) => write!(f, "Serialization error: {}", e),
            LightSyncError::State(msg) => write!(f, "State error: {}", msg),
            LightSyncError::Io(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::FileNotFound(path) => write!(f, "Config file not found: {}", path),
            ConfigError::ParseError(msg) => write!(f, "Failed to parse config: {}", msg),
            ConfigError::InvalidValue { field, reason } => {
                write!(f, "Invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl fmt::Display for LifecycleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LifecycleError::NotBound { operation } => {
                write!(f, "Cannot {} before the light handle is bound", operation)
            }
            LifecycleError::Detached { operation } => {
                write!(f, "Cannot {} after the component was detached", operation)
            }
            LifecycleError::InvalidTransition { from, to } => {
                write!(f, "Invalid lifecycle transition {:?} -> {:?}", from, to)
            }
        }
    }
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::MissingAsset(path) => write!(f, "Missing required asset: {}", path),
            ResourceError::LoadFailed { path, reason } => {
                write!(f, "Failed to load '{}': {}", path.display(), reason)
            }
        }
    }
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::InvalidField { key, reason } => {
                write!(f, "Invalid data for '{}': {}", key, reason)
            }
            SerializationError::Unrepresentable { key, reason } => {
                write!(f, "Cannot write '{}': {}", key, reason)
            }
            SerializationError::ParseError(msg) => write!(f, "Failed to parse data: {}", msg),
        }
    }
}

impl std::error::Error for LightSyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LightSyncError::Io(e) => Some(e),
            LightSyncError::Config(e) => Some(e),
            LightSyncError::Lifecycle(e) => Some(e),
            LightSyncError::Resource(e) => Some(e),
            LightSyncError::Serialization(e) => Some(e),
            LightSyncError::State(_) => None,
        }
    }
}

impl std::error::Error for ConfigError {}
impl std::error::Error for LifecycleError {}
impl std::error::Error for ResourceError {}
impl std::error::Error for SerializationError {}

// 实现 From trait 以便于错误转换
impl From<std::io::Error> for LightSyncError {
    fn from(err: std::io::Error) -> Self {
        LightSyncError::Io(err)
    }
}

impl From<ConfigError> for LightSyncError {
    fn from(err: ConfigError) -> Self {
        LightSyncError::Config(err)
    }
}

impl From<LifecycleError> for LightSyncError {
    fn from(err: LifecycleError) -> Self {
        LightSyncError::Lifecycle(err)
    }
}

impl From<ResourceError> for LightSyncError {
    fn from(err: ResourceError) -> Self {
        LightSyncError::Resource(err)
    }
}

impl From<SerializationError> for LightSyncError {
    fn from(err: SerializationError) -> Self {
        LightSyncError::Serialization(err)
    }
}
