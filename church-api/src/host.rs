//! 宿主值模型
//!
//! 进入和离开闭包编码的普通 Rust 值，以及它与 JSON 的映射：
//!
//! | JSON | HostValue |
//! |---|---|
//! | `null` | `Void` |
//! | `true` / `false` | `Bool` |
//! | 整数 | `Int` |
//! | 字符串 | `Str` |
//! | 数组 | `List` |
//! | `{"char": "c"}` | `Char` |
//! | `{"pair": [a, b]}` | `Pair` |
//! | `{"neg_zero": null}` | `NegZero` |

use crate::error::ChurchError;
use serde_json::{json, Map, Value as Json};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostValue {
    Void,
    Bool(bool),
    Int(i64),
    /// 带负号标签的零；只作为输入，还原时得到 `Int(0)`
    NegZero,
    Char(char),
    Str(String),
    List(Vec<HostValue>),
    Pair(Box<HostValue>, Box<HostValue>),
}

impl HostValue {
    pub fn pair(head: HostValue, tail: HostValue) -> Self {
        HostValue::Pair(Box::new(head), Box::new(tail))
    }

    pub fn from_json_str(text: &str) -> Result<Self, ChurchError> {
        let json: Json = serde_json::from_str(text)?;
        HostValue::try_from(&json)
    }

    pub fn to_json(&self) -> Json {
        Json::from(self)
    }
}

// ==================== JSON 映射 ====================

impl TryFrom<&Json> for HostValue {
    type Error = ChurchError;

    fn try_from(json: &Json) -> Result<Self, Self::Error> {
        match json {
            Json::Null => Ok(HostValue::Void),
            Json::Bool(b) => Ok(HostValue::Bool(*b)),
            Json::Number(n) => n
                .as_i64()
                .map(HostValue::Int)
                .ok_or_else(|| ChurchError::Malformed(format!("not an integer: {n}"))),
            Json::String(s) => Ok(HostValue::Str(s.clone())),
            Json::Array(items) => items
                .iter()
                .map(HostValue::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(HostValue::List),
            Json::Object(map) => from_tagged_object(map),
        }
    }
}

/// 单键对象：`char`、`pair` 或 `neg_zero`
fn from_tagged_object(map: &Map<String, Json>) -> Result<HostValue, ChurchError> {
    let mut entries = map.iter();
    let (key, body) = match (entries.next(), entries.next()) {
        (Some(entry), None) => entry,
        _ => {
            return Err(ChurchError::Malformed(
                "object must have exactly one key".to_string(),
            ))
        }
    };
    match key.as_str() {
        "char" => {
            let text = body
                .as_str()
                .ok_or_else(|| ChurchError::Malformed("char must be a string".to_string()))?;
            let mut chars = text.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Ok(HostValue::Char(c)),
                _ => Err(ChurchError::Malformed(format!(
                    "char must be exactly one character: {text:?}"
                ))),
            }
        }
        "pair" => match body.as_array().map(Vec::as_slice) {
            Some([head, tail]) => Ok(HostValue::pair(
                HostValue::try_from(head)?,
                HostValue::try_from(tail)?,
            )),
            _ => Err(ChurchError::Malformed(
                "pair must be an array of two values".to_string(),
            )),
        },
        "neg_zero" => Ok(HostValue::NegZero),
        other => Err(ChurchError::Malformed(format!("unknown object key: {other}"))),
    }
}

impl From<&HostValue> for Json {
    fn from(value: &HostValue) -> Self {
        match value {
            HostValue::Void => Json::Null,
            HostValue::Bool(b) => Json::Bool(*b),
            HostValue::Int(n) => json!(n),
            HostValue::NegZero => json!({ "neg_zero": null }),
            HostValue::Char(c) => json!({ "char": c.to_string() }),
            HostValue::Str(s) => Json::String(s.clone()),
            HostValue::List(items) => Json::Array(items.iter().map(Json::from).collect()),
            HostValue::Pair(head, tail) => {
                json!({ "pair": [Json::from(head.as_ref()), Json::from(tail.as_ref())] })
            }
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
