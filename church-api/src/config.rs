//! API 层配置
//!
//! 包含执行配置 RunConfig 和全局单例（供 CLI 使用）

use church_config::{ChurchConfig, LimitConfig};
use once_cell::sync::OnceCell;

/// Execution configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    /// Whether to report the result's type tag alongside the value
    pub show_type: bool,
    /// Evaluation limits
    pub limits: LimitConfig,
}

impl RunConfig {
    /// 由文件配置构造，其余字段取默认值
    pub fn from_church_config(config: &ChurchConfig) -> Self {
        Self {
            limits: config.limits.clone(),
            ..Self::default()
        }
    }
}

// Global config singleton for CLI convenience
static GLOBAL_CONFIG: OnceCell<RunConfig> = OnceCell::new();

/// Initialize global configuration (must be called once before any operation)
///
/// # Panics
/// If config is already initialized
pub fn init(config: RunConfig) {
    GLOBAL_CONFIG
        .set(config)
        .expect("Config already initialized");
}

/// Get global config reference
///
/// # Panics
/// If config is not initialized
pub fn config() -> &'static RunConfig {
    GLOBAL_CONFIG.get().expect("Config not initialized")
}

/// Check if config is initialized
pub fn is_initialized() -> bool {
    GLOBAL_CONFIG.get().is_some()
}

/// Get the global config, installing the default on first use
pub fn get_or_init_default() -> &'static RunConfig {
    GLOBAL_CONFIG.get_or_init(RunConfig::default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_run_config() {
        let cfg = RunConfig::default();
        assert!(!cfg.show_type);
        assert_eq!(cfg.limits.stack_size, 512 * 1024 * 1024);
        assert_eq!(cfg.limits.max_magnitude, 100_000);
    }

    #[test]
    fn test_from_church_config() {
        let file = ChurchConfig::from_json_str(r#"{"limits": {"max_list_len": 5}}"#).unwrap();
        let cfg = RunConfig::from_church_config(&file);
        assert_eq!(cfg.limits.max_list_len, 5);
        assert!(!cfg.show_type);
    }

    #[test]
    fn test_global_config() {
        // 全局状态在同一进程的测试间共享，只检查可读
        let cfg = get_or_init_default();
        assert!(is_initialized());
        assert_eq!(config(), cfg);
    }
}
