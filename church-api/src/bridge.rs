//! 宿主值与闭包编码之间的转换
//!
//! 构造与提取（numeral / numerify / boolify / listify / unpairify）
//! 来自 `church_core::bare::host`。宿主输入构造的 numeral 用循环调用 `f`，
//! 解码它们不占栈；运算结果（例如 `pred` 链）的递归深度仍与量级成正比，
//! 应在 `evaluate` 提供的大栈线程上调用。

use crate::error::ChurchError;
use crate::host::HostValue;
use church_config::{LimitConfig, BARE_TARGET, BRIDGE_TARGET};
use church_core::app;
use church_core::bare::{self, host, Term};
use church_core::typed::{self, TypeTag, Value};

pub use church_core::bare::host::{boolify, listify, numeral, numerify, unpairify};

// ==================== 输入检查 ====================

/// 构造闭包之前拒绝超限的宿主输入
///
/// 字符不受 `max_magnitude` 约束：任何 `char` 的序数都能安全构造和解码。
pub fn check_limits(value: &HostValue, limits: &LimitConfig) -> Result<(), ChurchError> {
    let magnitude = |what: &'static str, n: u64| {
        if n > limits.max_magnitude {
            Err(ChurchError::LimitExceeded {
                what,
                value: n,
                limit: limits.max_magnitude,
            })
        } else {
            Ok(())
        }
    };
    let length = |what: &'static str, n: usize| {
        if n > limits.max_list_len {
            Err(ChurchError::LimitExceeded {
                what,
                value: n as u64,
                limit: limits.max_list_len as u64,
            })
        } else {
            Ok(())
        }
    };

    match value {
        HostValue::Void | HostValue::Bool(_) | HostValue::NegZero | HostValue::Char(_) => Ok(()),
        HostValue::Int(n) => magnitude("integer magnitude", n.unsigned_abs()),
        HostValue::Str(s) => length("string length", s.chars().count()),
        HostValue::List(items) => {
            length("list length", items.len())?;
            items.iter().try_for_each(|item| check_limits(item, limits))
        }
        HostValue::Pair(head, tail) => {
            check_limits(head, limits)?;
            check_limits(tail, limits)
        }
    }
}

// ==================== 宿主 -> bare ====================

/// 无标签编码；整数只保留量级，字符串为字符序数列表
pub fn to_bare(value: &HostValue) -> Term {
    tracing::trace!(target: BARE_TARGET, value = %value, "to_bare");
    match value {
        HostValue::Void => bare::void(),
        HostValue::Bool(b) => host::boolean(*b),
        HostValue::Int(n) => numeral(n.unsigned_abs()),
        HostValue::NegZero => bare::zero(),
        HostValue::Char(c) => numeral(u64::from(*c)),
        HostValue::Str(s) => {
            let ordinals: Vec<Term> = s.chars().map(|c| numeral(u64::from(c))).collect();
            host::list(ordinals)
        }
        HostValue::List(items) => host::list(items.iter().map(to_bare).collect()),
        HostValue::Pair(head, tail) => app!(bare::pair(), to_bare(head), to_bare(tail)),
    }
}

// ==================== 宿主 -> typed ====================

pub fn to_typed(value: &HostValue) -> Value {
    match value {
        HostValue::Void => Value::void(),
        HostValue::Bool(b) => Value::Bool(host::boolean(*b)),
        HostValue::Int(n) if *n < 0 => Value::NegInt(numeral(n.unsigned_abs())),
        HostValue::Int(n) => Value::PosInt(numeral(n.unsigned_abs())),
        HostValue::NegZero => Value::NegInt(bare::zero()),
        HostValue::Char(c) => Value::Char(numeral(u64::from(*c))),
        HostValue::Str(s) => {
            let chars: Vec<Term> = s
                .chars()
                .map(|c| Value::Char(numeral(u64::from(c))).embed())
                .collect();
            Value::String(host::list(chars))
        }
        HostValue::List(items) => items
            .iter()
            .rev()
            .fold(Value::empty_list(), |acc, item| typed::prepend(&to_typed(item), &acc)),
        HostValue::Pair(head, tail) => typed::mk_pair(&to_typed(head), &to_typed(tail)),
    }
}

// ==================== typed -> 宿主 ====================

fn embedded(term: &Term, context: &str) -> Result<Value, ChurchError> {
    Value::from_term(term)
        .ok_or_else(|| ChurchError::Malformed(format!("{context} is not a typed value")))
}

fn magnitude_to_i64(n: u64) -> Result<i64, ChurchError> {
    i64::try_from(n).map_err(|_| ChurchError::Malformed(format!("integer {n} out of range")))
}

fn ordinal_to_char(n: u64) -> Result<char, ChurchError> {
    u32::try_from(n)
        .ok()
        .and_then(char::from_u32)
        .ok_or_else(|| ChurchError::Malformed(format!("{n} is not a character ordinal")))
}

/// 还原 typed 值；typed Error 和失败的结果对变成 `Err`
pub fn from_typed(value: &Value) -> Result<HostValue, ChurchError> {
    match value {
        Value::Void => Ok(HostValue::Void),
        Value::Bool(b) => Ok(HostValue::Bool(boolify(b))),
        Value::PosInt(n) => magnitude_to_i64(numerify(n)).map(HostValue::Int),
        Value::NegInt(n) => magnitude_to_i64(numerify(n)).map(|m| HostValue::Int(-m)),
        Value::Char(c) => ordinal_to_char(numerify(c)).map(HostValue::Char),
        Value::String(chars) => listify(chars)
            .iter()
            .map(|t| match embedded(t, "string element")? {
                Value::Char(c) => ordinal_to_char(numerify(&c)),
                other => Err(ChurchError::Malformed(format!(
                    "string element has tag {}",
                    other.tag()
                ))),
            })
            .collect::<Result<String, _>>()
            .map(HostValue::Str),
        Value::List(items) => listify(items)
            .iter()
            .map(|t| from_typed(&embedded(t, "list element")?))
            .collect::<Result<Vec<_>, _>>()
            .map(HostValue::List),
        Value::Pair(p) => {
            let (head, tail) = unpairify(p);
            Ok(HostValue::pair(
                from_typed(&embedded(&head, "pair head")?)?,
                from_typed(&embedded(&tail, "pair tail")?)?,
            ))
        }
        Value::ResultPair(rp) => {
            let (payload, errnum) = unpairify(rp);
            match numerify(&errnum) {
                0 => from_typed(&embedded(&payload, "result value")?),
                code => {
                    tracing::debug!(target: BRIDGE_TARGET, code, "result pair carries an error");
                    Err(ChurchError::from_code(code))
                }
            }
        }
        Value::Error(code) => Err(ChurchError::from_code(numerify(code))),
    }
}

/// 结果的外层标签；成功的结果对取其载荷的标签
pub fn result_tag(value: &Value) -> TypeTag {
    match value {
        Value::ResultPair(rp) => {
            let (payload, _) = unpairify(rp);
            Value::from_term(&payload).map_or(TypeTag::ResultPair, |inner| inner.tag())
        }
        other => other.tag(),
    }
}
