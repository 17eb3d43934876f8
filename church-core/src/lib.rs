//! Church Core - 闭包编码的计算核心（纯逻辑，无 IO）
//!
//! 包含 bare 层（布尔、numeral、序对、列表、不动点、结果对）
//! 和其上的 typed 层。所有值都只由闭包组合而成。
//!
//! 深递归的栈深度与 numeral 大小和列表长度成正比，
//! 调用方负责提供足够大的栈。

pub mod bare;
pub mod error;
pub mod typed;

#[cfg(test)]
mod test_support;

// Re-export common types
pub use bare::Term;
pub use error::ErrorCode;
pub use typed::{TypeTag, Value};

// Re-export config types from church-config
pub use church_config::{LimitConfig, Phase};
