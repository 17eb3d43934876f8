//! CLI 日志系统初始化
//!
//! 基于 `tracing-subscriber` 实现分阶段日志控制。
//! 日志写到 stderr，stdout 只留给结果 JSON。

use crate::config::LogConfig;
use church_config::CLI_TARGET;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// 日志输出格式
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    /// 彩色格式化（开发使用）
    Pretty,
    /// 紧凑格式
    Compact,
    /// JSON 格式（工具集成）
    Json,
}

/// 由日志配置构造 target 过滤器
pub fn build_targets(log_config: &LogConfig) -> Targets {
    log_config
        .phase_levels()
        .into_iter()
        .fold(Targets::new().with_default(log_config.global), |targets, (target, level)| {
            targets.with_target(target, level)
        })
        .with_target(CLI_TARGET, log_config.global)
}

/// 使用指定格式和日志配置初始化日志系统；给出文件时同时追加写入文件
pub fn init_with_file<P: AsRef<Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    let targets = build_targets(log_config);
    let console_layer = create_format_layer(format, io::stderr).with_filter(targets.clone());

    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        let file_layer = fmt::layer()
            .with_ansi(false)
            .with_writer(Mutex::new(file_handle))
            .with_filter(targets);

        tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .init();
    } else {
        tracing_subscriber::registry().with(console_layer).init();
    }
    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>
where
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use church_config::{BRIDGE_TARGET, TYPED_TARGET};
    use tracing::Level;

    #[test]
    fn test_targets_follow_phase_levels() {
        let log_config = LogConfig {
            global: Level::WARN,
            bare: None,
            typed: Some(Level::TRACE),
            bridge: None,
        };
        let targets = build_targets(&log_config);
        assert!(targets.would_enable(TYPED_TARGET, &Level::TRACE));
        assert!(!targets.would_enable(BRIDGE_TARGET, &Level::INFO));
        assert!(targets.would_enable(CLI_TARGET, &Level::WARN));
    }
}
