//! Church API - Evaluation entry points
//!
//! Provides the unified evaluation interface, including:
//! - Host value model and conversions (HostValue, bridge)
//! - Operation registry (Operation)
//! - Configuration abstraction (RunConfig)
//! - Unified error handling (ChurchError)
//!
//! For CLI convenience, this crate provides a global singleton API.
//! For library use, prefer the explicit `run(op, args, &config)` API.

use church_config::BRIDGE_TARGET;
use tracing::{debug, info};

pub mod bridge;
pub mod host;
pub mod ops;

// Re-export config
pub mod config;
pub use config::{config as get_config, init as init_config, is_initialized, RunConfig};

// Re-export config types from church_config
pub use church_config::{ChurchConfig, LimitConfig, LogLevel, LoggingConfig, Phase};

// Re-export error and types
pub mod error;
pub mod types;
pub use error::{ChurchError, ErrorDetails, ErrorReport};
pub use host::HostValue;
pub use ops::Operation;
pub use types::ExecuteOutput;

// Re-export core types
pub use church_config;
pub use church_core::{TypeTag, Value};

/// Run `f` on a dedicated thread whose stack size comes from `limits`
///
/// Closure values are not `Send`, so everything that builds or inspects
/// them must happen inside `f`.
pub fn evaluate<F, R>(limits: &LimitConfig, f: F) -> Result<R, ChurchError>
where
    F: FnOnce() -> Result<R, ChurchError> + Send + 'static,
    R: Send + 'static,
{
    let handle = std::thread::Builder::new()
        .name("church-eval".to_string())
        .stack_size(limits.stack_size)
        .spawn(f)?;
    handle.join().map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        ChurchError::EvaluationPanicked(message)
    })?
}

/// Evaluate one typed operation with explicit configuration
///
/// This is the recommended API for library users.
pub fn run(op: Operation, args: &[HostValue], config: &RunConfig) -> Result<ExecuteOutput, ChurchError> {
    info!(target: BRIDGE_TARGET, op = %op, argc = args.len(), "Starting evaluation");

    op.check_arity(args.len())?;
    for arg in args {
        bridge::check_limits(arg, &config.limits)?;
    }

    let args = args.to_vec();
    let output = evaluate(&config.limits, move || {
        let typed_args: Vec<Value> = args.iter().map(bridge::to_typed).collect();
        let result = op.apply(&typed_args);
        debug!(target: BRIDGE_TARGET, tag = %result.tag(), "operation returned");
        let type_tag = bridge::result_tag(&result);
        let value = bridge::from_typed(&result)?;
        Ok(ExecuteOutput { value, type_tag })
    })?;

    info!(target: BRIDGE_TARGET, "Evaluation completed");
    Ok(output)
}

/// Look up an operation by name, then run it
pub fn run_named(name: &str, args: &[HostValue], config: &RunConfig) -> Result<ExecuteOutput, ChurchError> {
    let op: Operation = name.parse()?;
    run(op, args, config)
}

// ==================== Global-config API ====================

/// Run with the global config
///
/// # Panics
/// If global config is not initialized
pub fn run_global(name: &str, args: &[HostValue]) -> Result<ExecuteOutput, ChurchError> {
    run_named(name, args, get_config())
}

/// Quick run with default config (auto-initializes if needed)
pub fn quick_run(name: &str, args: &[HostValue]) -> Result<ExecuteOutput, ChurchError> {
    run_named(name, args, config::get_or_init_default())
}
