//! CLI 配置
//!
//! 把文件配置中的日志级别转换为 tracing 的级别，并按 target 查询

use church_config::{LogLevel, LoggingConfig, Phase, BARE_TARGET, BRIDGE_TARGET, TYPED_TARGET};
use tracing::Level;

/// CLI 日志配置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub global: Level,
    pub bare: Option<Level>,
    pub typed: Option<Level>,
    pub bridge: Option<Level>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::from(&LoggingConfig::default())
    }
}

impl From<&LoggingConfig> for LogConfig {
    fn from(logging: &LoggingConfig) -> Self {
        Self {
            global: to_tracing_level(logging.level),
            bare: logging.bare.map(to_tracing_level),
            typed: logging.typed.map(to_tracing_level),
            bridge: logging.bridge.map(to_tracing_level),
        }
    }
}

impl LogConfig {
    /// Get log level for a specific target
    pub fn level_for(&self, target: &str) -> Level {
        match target {
            BARE_TARGET => self.bare.unwrap_or(self.global),
            TYPED_TARGET => self.typed.unwrap_or(self.global),
            BRIDGE_TARGET => self.bridge.unwrap_or(self.global),
            _ => self.global,
        }
    }

    /// Per-phase (target, level) pairs in layering order
    pub fn phase_levels(&self) -> Vec<(&'static str, Level)> {
        Phase::ALL
            .iter()
            .map(|phase| (phase.target(), self.level_for(phase.target())))
            .collect()
    }
}

pub fn to_tracing_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Error => Level::ERROR,
        LogLevel::Warn => Level::WARN,
        LogLevel::Info => Level::INFO,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Trace => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_warn() {
        let cfg = LogConfig::default();
        assert_eq!(cfg.global, Level::WARN);
        assert_eq!(cfg.level_for(TYPED_TARGET), Level::WARN);
    }

    #[test]
    fn test_phase_override() {
        let logging = LoggingConfig {
            level: LogLevel::Error,
            typed: Some(LogLevel::Trace),
            ..LoggingConfig::default()
        };
        let cfg = LogConfig::from(&logging);
        assert_eq!(cfg.level_for(TYPED_TARGET), Level::TRACE);
        assert_eq!(cfg.level_for(BRIDGE_TARGET), Level::ERROR);
        assert_eq!(cfg.level_for("church::cli"), Level::ERROR);
        assert_eq!(
            cfg.phase_levels(),
            vec![
                (BARE_TARGET, Level::ERROR),
                (TYPED_TARGET, Level::TRACE),
                (BRIDGE_TARGET, Level::ERROR),
            ]
        );
    }
}
