//! 核心功能模块
//!
//! 提供数学库、日志系统、配置管理和错误处理。
//! 这些模块与具体的光照后端、资源系统无关。
//!
//! # 模块组织
//!
//! - `math`：数学库，提供向量、矩阵、角度、颜色
//! - `log`：日志系统，提供结构化的日志记录功能
//! - `config`：配置管理，支持从配置文件加载设置
//! - `error`：错误处理，定义统一的错误类型

pub mod math;
pub mod log;
pub mod config;
pub mod error;

// 重新导出常用类型，方便使用
pub use math::{Vector2, Matrix3, Angle, Color};
pub use error::{
    Result, LightSyncError, ConfigError, LifecycleError, ResourceError, SerializationError,
};
pub use config::Config;
