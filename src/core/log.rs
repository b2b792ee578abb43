//! 日志系统模块
//!
//! 基于 `tracing` 提供结构化的日志记录功能。
//!
//! # 特性
//!
//! - 结构化日志：支持键值对
//! - 灵活输出：支持控制台和文件输出
//! - 日志级别：trace, debug, info, warn, error
//! - 按子系统划分的 target：`light_sync::lighting`、`light_sync::net`

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::path::Path;

use super::config::LogLevel;

/// 初始化日志系统
///
/// 必须在程序开始时调用一次。
///
/// # 参数
///
/// * `level` - 日志级别
/// * `file_output` - 是否输出到文件
/// * `log_file_path` - 日志文件路径（可选，默认为 "light_sync.log"）
pub fn init_logger(level: LogLevel, file_output: bool, log_file_path: Option<&str>) {
    let filter = EnvFilter::new(filter_directive(level));

    if file_output {
        // 解析日志文件路径
        let log_path = log_file_path.unwrap_or("light_sync.log");
        let path = Path::new(log_path);
        let directory = path.parent().unwrap_or(Path::new("."));
        let filename = path.file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("light_sync.log");

        // 创建滚动文件 appender（每天滚动）
        let file_appender = RollingFileAppender::new(
            Rotation::DAILY,
            directory,
            filename
        );

        let console_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(true);

        let file_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_ansi(false)  // 文件不需要 ANSI 颜色
            .with_writer(file_appender);

        tracing_subscriber::registry()
            .with(filter)
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_ansi(true);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

/// 日志级别对应的过滤指令
fn filter_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Trace => "trace",
        LogLevel::Debug => "debug",
        LogLevel::Info => "info",
        LogLevel::Warn => "warn",
        LogLevel::Error => "error",
    }
}

/// 光照子系统日志 - Debug 级别
#[macro_export]
macro_rules! lighting_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "light_sync::lighting", $($arg)*)
    };
}

/// 光照子系统日志 - Warn 级别
#[macro_export]
macro_rules! lighting_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "light_sync::lighting", $($arg)*)
    };
}

/// 光照子系统日志 - Error 级别
#[macro_export]
macro_rules! lighting_error {
    ($($arg:tt)*) => {
        tracing::error!(target: "light_sync::lighting", $($arg)*)
    };
}

/// 网络状态日志 - Debug 级别
#[macro_export]
macro_rules! net_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: "light_sync::net", $($arg)*)
    };
}

/// 网络状态日志 - Warn 级别
#[macro_export]
macro_rules! net_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: "light_sync::net", $($arg)*)
    };
}
