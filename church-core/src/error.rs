//! 错误码 (Core 层)
//!
//! 错误是值，不是控制流：失败的运算返回携带错误码的结果对或 typed Error 值，
//! 由调用方显式检查。

use crate::bare::{self, Term};
use thiserror::Error;

/// 错误码枚举，数值与 bare 层的错误 numeral 一致
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    #[error("no error")]
    NoError = 0,
    /// 参数类型标签不符
    #[error("type error")]
    TypeError = 1,
    /// 列表或字符串下标越界
    #[error("index error")]
    IndexError = 2,
}

impl ErrorCode {
    pub fn id(self) -> u64 {
        self as u64
    }

    pub fn from_id(id: u64) -> Option<Self> {
        match id {
            0 => Some(ErrorCode::NoError),
            1 => Some(ErrorCode::TypeError),
            2 => Some(ErrorCode::IndexError),
            _ => None,
        }
    }

    /// 对应的 bare numeral
    pub fn numeral(self) -> Term {
        match self {
            ErrorCode::NoError => bare::no_error_id(),
            ErrorCode::TypeError => bare::type_error_id(),
            ErrorCode::IndexError => bare::index_error_id(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorCode::NoError => "NoError",
            ErrorCode::TypeError => "TypeError",
            ErrorCode::IndexError => "IndexError",
        }
    }
}
