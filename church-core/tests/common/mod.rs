//! 测试辅助工具
//!
//! 构造与观察 bare / typed 值，以及在大栈线程上运行测试体

#![allow(dead_code)]

use church_core::app;
use church_core::bare::{self, Term};
use church_core::typed::{self, Value};

pub use church_core::bare::host::{boolify, listify, numerify};

/// 深递归测试使用的栈大小
pub const TEST_STACK_SIZE: usize = 256 * 1024 * 1024;

/// 在大栈线程上运行测试体
pub fn with_big_stack<F, R>(f: F) -> R
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    std::thread::Builder::new()
        .stack_size(TEST_STACK_SIZE)
        .spawn(f)
        .expect("spawn test thread")
        .join()
        .expect("test thread panicked")
}

// ==================== Bare ====================

/// 由 `succ` 逐次构造的 numeral
pub fn nat(n: u64) -> Term {
    (0..n).fold(bare::zero(), |acc, _| bare::succ().apply(acc))
}

pub fn nat_list(items: &[u64]) -> Term {
    items
        .iter()
        .rev()
        .fold(bare::nil(), |tail, &n| app!(bare::cons(), nat(n), tail))
}

pub fn listify_nats(list: &Term) -> Vec<u64> {
    listify(list).iter().map(numerify).collect()
}

// ==================== Typed ====================

pub fn int(n: i64) -> Value {
    if n < 0 {
        Value::NegInt(nat(n.unsigned_abs()))
    } else {
        Value::PosInt(nat(n as u64))
    }
}

pub fn neg_zero() -> Value {
    Value::NegInt(bare::zero())
}

pub fn int_list(items: &[i64]) -> Value {
    items
        .iter()
        .rev()
        .fold(Value::empty_list(), |acc, &n| typed::prepend(&int(n), &acc))
}

pub fn string(text: &str) -> Value {
    let chars = text.chars().rev().fold(bare::nil(), |acc, c| {
        app!(bare::cons(), Value::Char(nat(c as u64)).embed(), acc)
    });
    Value::String(chars)
}

pub fn get_int(value: &Value) -> Option<i64> {
    match value {
        Value::PosInt(n) => Some(numerify(n) as i64),
        Value::NegInt(n) => Some(-(numerify(n) as i64)),
        _ => None,
    }
}

pub fn get_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(boolify(b)),
        _ => None,
    }
}

pub fn get_string(value: &Value) -> Option<String> {
    match value {
        Value::String(chars) => listify(chars)
            .iter()
            .map(|t| match Value::from_term(t)? {
                Value::Char(c) => char::from_u32(numerify(&c) as u32),
                _ => None,
            })
            .collect(),
        _ => None,
    }
}

pub fn get_ints(value: &Value) -> Option<Vec<i64>> {
    match value {
        Value::List(l) => listify(l)
            .iter()
            .map(|t| Value::from_term(t).as_ref().and_then(get_int))
            .collect(),
        _ => None,
    }
}

/// typed Error 的错误码
pub fn error_code(value: &Value) -> Option<u64> {
    match value {
        Value::Error(code) => Some(numerify(code)),
        _ => None,
    }
}

/// ResultPair 的 (载荷, 错误码)
pub fn unpack_result(value: &Value) -> Option<(Value, u64)> {
    match value {
        Value::ResultPair(rp) => {
            let payload = Value::reify(&bare::result_val().apply(rp.clone()));
            let code = numerify(&bare::result_errval().apply(rp.clone()));
            Some((payload, code))
        }
        _ => None,
    }
}
