//! Church Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It serves as the shared configuration vocabulary across all Church crates.

use serde::Deserialize;
use std::str::FromStr;

/// Log target for the untyped closure layer
pub const BARE_TARGET: &str = "church::bare";
/// Log target for the typed value layer
pub const TYPED_TARGET: &str = "church::typed";
/// Log target for host conversions
pub const BRIDGE_TARGET: &str = "church::bridge";
/// Log target for the command line front end
pub const CLI_TARGET: &str = "church::cli";

/// Configuration for evaluation limits
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LimitConfig {
    /// Stack size (bytes) of the evaluation thread
    pub stack_size: usize,
    /// Largest integer magnitude accepted from the host
    pub max_magnitude: u64,
    /// Longest host list or string accepted from the host
    pub max_list_len: usize,
}

impl Default for LimitConfig {
    fn default() -> Self {
        Self {
            stack_size: 512 * 1024 * 1024,
            max_magnitude: 100_000,
            max_list_len: 10_000,
        }
    }
}

/// Evaluation phase enum for phase-specific configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Bare,
    Typed,
    Bridge,
}

impl Phase {
    /// All phases, in layering order
    pub const ALL: [Phase; 3] = [Phase::Bare, Phase::Typed, Phase::Bridge];

    /// Get the log target name for this phase
    pub fn target(&self) -> &'static str {
        match self {
            Phase::Bare => BARE_TARGET,
            Phase::Typed => TYPED_TARGET,
            Phase::Bridge => BRIDGE_TARGET,
        }
    }
}

/// Log verbosity, ordered from quietest to loudest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            // silent = only errors
            "silent" | "error" => Ok(LogLevel::Error),
            "warn" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// Per-phase log levels; `None` falls back to `level`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub bare: Option<LogLevel>,
    pub typed: Option<LogLevel>,
    pub bridge: Option<LogLevel>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Warn,
            bare: None,
            typed: None,
            bridge: None,
        }
    }
}

impl LoggingConfig {
    /// Get log level for a specific phase
    pub fn level_for(&self, phase: Phase) -> LogLevel {
        let specific = match phase {
            Phase::Bare => self.bare,
            Phase::Typed => self.typed,
            Phase::Bridge => self.bridge,
        };
        specific.unwrap_or(self.level)
    }
}

/// Contents of a `church.json` configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChurchConfig {
    pub limits: LimitConfig,
    pub logging: LoggingConfig,
}

impl ChurchConfig {
    /// Parse a configuration document; missing fields take their defaults
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
