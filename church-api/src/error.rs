//! API 错误类型
//!
//! 提供统一的错误类型和结构化错误报告。
//! core 层的错误是值；到了 bridge 才变成 `Result` 的 `Err`。

use church_core::ErrorCode;
use thiserror::Error;

/// Church 错误类型
#[derive(Error, Debug)]
pub enum ChurchError {
    /// typed TypeError，或携带 TypeError 的结果对
    #[error("Type error")]
    Type,

    /// typed IndexError，或携带 IndexError 的结果对
    #[error("Index error")]
    Index,

    /// 错误值携带的错误码无法识别
    #[error("Unknown error code: {0}")]
    UnknownErrorCode(u64),

    /// 值的形状与标签不符，无法还原为宿主值
    #[error("Malformed value: {0}")]
    Malformed(String),

    /// 宿主输入超过 `LimitConfig` 的上限
    #[error("{what} {value} exceeds limit {limit}")]
    LimitExceeded {
        what: &'static str,
        value: u64,
        limit: u64,
    },

    #[error("Unknown operation: {0}")]
    UnknownOperation(String),

    #[error("{op} expects {expected} argument(s), got {found}")]
    Arity {
        op: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// 求值线程 panic（通常是栈溢出以外的内部错误）
    #[error("Evaluation panicked: {0}")]
    EvaluationPanicked(String),
}

impl ChurchError {
    /// 由 core 错误码得到对应的错误
    pub fn from_code(id: u64) -> Self {
        match ErrorCode::from_id(id) {
            Some(ErrorCode::TypeError) => ChurchError::Type,
            Some(ErrorCode::IndexError) => ChurchError::Index,
            Some(ErrorCode::NoError) | None => ChurchError::UnknownErrorCode(id),
        }
    }

    /// 获取错误阶段名称
    pub fn phase(&self) -> &'static str {
        match self {
            ChurchError::Type | ChurchError::Index | ChurchError::UnknownErrorCode(_) => "typed",
            ChurchError::Malformed(_)
            | ChurchError::LimitExceeded { .. }
            | ChurchError::UnknownOperation(_)
            | ChurchError::Arity { .. }
            | ChurchError::Json(_) => "bridge",
            ChurchError::Config(_) | ChurchError::Io(_) => "config",
            ChurchError::EvaluationPanicked(_) => "runtime",
        }
    }

    /// 错误类型名（可用于程序化处理）
    pub fn kind(&self) -> &'static str {
        match self {
            ChurchError::Type => "TypeError",
            ChurchError::Index => "IndexError",
            ChurchError::UnknownErrorCode(_) => "UnknownErrorCode",
            ChurchError::Malformed(_) => "Malformed",
            ChurchError::LimitExceeded { .. } => "LimitExceeded",
            ChurchError::UnknownOperation(_) => "UnknownOperation",
            ChurchError::Arity { .. } => "Arity",
            ChurchError::Json(_) => "Json",
            ChurchError::Config(_) => "Config",
            ChurchError::Io(_) => "Io",
            ChurchError::EvaluationPanicked(_) => "EvaluationPanicked",
        }
    }

    /// 转换为结构化错误报告
    ///
    /// CLI 直接打印，上层应用可以序列化为 JSON。
    pub fn to_report(&self) -> ErrorReport {
        let details = match self {
            ChurchError::LimitExceeded { limit, .. } => Some(ErrorDetails::Limit { limit: *limit }),
            ChurchError::Arity { expected, .. } => Some(ErrorDetails::Arity {
                expected: *expected,
            }),
            _ => None,
        };
        ErrorReport {
            phase: self.phase(),
            error_kind: self.kind().to_string(),
            message: self.to_string(),
            details,
        }
    }
}

/// 结构化错误报告
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorReport {
    /// 错误阶段: typed, bridge, config, runtime
    pub phase: &'static str,
    /// 错误类型
    pub error_kind: String,
    /// 人类可读的错误消息
    pub message: String,
    /// 额外详情
    pub details: Option<ErrorDetails>,
}

/// 错误额外详情
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorDetails {
    Limit { limit: u64 },
    Arity { expected: usize },
}

impl std::fmt::Display for ErrorReport {
    /// 默认的 CLI 友好格式
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}: {}", self.phase, self.error_kind, self.message)
    }
}

impl ErrorReport {
    /// 转换为 JSON 值（Web API 使用）
    pub fn to_json(&self) -> serde_json::Value {
        let details = match &self.details {
            Some(ErrorDetails::Limit { limit }) => serde_json::json!({ "limit": limit }),
            Some(ErrorDetails::Arity { expected }) => serde_json::json!({ "expected": expected }),
            None => serde_json::Value::Null,
        };
        serde_json::json!({
            "phase": self.phase,
            "error_kind": self.error_kind,
            "message": self.message,
            "details": details,
        })
    }
}
