//! Typed 运算
//!
//! 每个运算先检查参数标签，不符时返回 typed TypeError（从不 panic），
//! 否则用 bare 运算计算再按结果类型重新包装。
//! 按 Church 布尔分支时经由 `select`，分支结果以原子形式穿过 bare `If`。

use super::value::Value;
use crate::app;
use crate::bare::{self, Term};
use church_config::TYPED_TARGET;

// ==================== 辅助 ====================

/// 按 bare 布尔 `test` 只求值一个分支
fn select<T, F>(test: Term, on_true: T, on_false: F) -> Value
where
    T: Fn() -> Value + 'static,
    F: Fn() -> Value + 'static,
{
    let chosen = app!(
        bare::if_(),
        test,
        Term::lam(move |_| on_true().embed()),
        Term::lam(move |_| on_false().embed()),
    );
    Value::reify(&chosen)
}

fn type_mismatch(op: &'static str, args: &[&Value]) -> Value {
    tracing::trace!(
        target: TYPED_TARGET,
        op = op,
        tags = ?args.iter().map(|v| v.tag()).collect::<Vec<_>>(),
        "type check failed"
    );
    Value::type_error()
}

/// 把 bare 下标查找的结果对重新包装成 typed ResultPair
///
/// 成功时元素已是嵌入的 typed 值；失败时载荷为 typed Void。
fn rewrap_lookup(rp: Term) -> Value {
    let chosen = app!(
        bare::on_result(),
        rp,
        Term::lam(|elem| Value::result_from(Value::reify(&elem), bare::no_error_id()).embed()),
        Term::lam(|errnum| Value::result_from(Value::void(), errnum).embed()),
    );
    Value::reify(&chosen)
}

// ==================== 整数 ====================

/// `plus - minus`，按大小决定符号
fn signed_difference(plus: &Term, minus: &Term) -> Value {
    let (p, m) = (plus.clone(), minus.clone());
    let (p2, m2) = (plus.clone(), minus.clone());
    select(
        app!(bare::leq(), minus.clone(), plus.clone()),
        move || Value::PosInt(app!(bare::sub(), p.clone(), m.clone())),
        move || Value::NegInt(app!(bare::sub(), m2.clone(), p2.clone())),
    )
}

pub fn add(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::PosInt(v1), Value::PosInt(v2)) => {
            Value::PosInt(app!(bare::add(), v1.clone(), v2.clone()))
        }
        (Value::PosInt(v1), Value::NegInt(v2)) => signed_difference(v1, v2),
        (Value::NegInt(v1), Value::PosInt(v2)) => signed_difference(v2, v1),
        (Value::NegInt(v1), Value::NegInt(v2)) => {
            Value::NegInt(app!(bare::add(), v1.clone(), v2.clone()))
        }
        _ => type_mismatch("Add", &[a, b]),
    }
}

pub fn mult(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::PosInt(v1), Value::PosInt(v2)) | (Value::NegInt(v1), Value::NegInt(v2)) => {
            Value::PosInt(app!(bare::mult(), v1.clone(), v2.clone()))
        }
        (Value::PosInt(v1), Value::NegInt(v2)) | (Value::NegInt(v1), Value::PosInt(v2)) => {
            Value::NegInt(app!(bare::mult(), v1.clone(), v2.clone()))
        }
        _ => type_mismatch("Mult", &[a, b]),
    }
}

/// 翻转符号标签；零也会翻转
pub fn neg(a: &Value) -> Value {
    match a {
        Value::PosInt(v) => Value::NegInt(v.clone()),
        Value::NegInt(v) => Value::PosInt(v.clone()),
        _ => type_mismatch("Neg", &[a]),
    }
}

pub fn sub(a: &Value, b: &Value) -> Value {
    add(a, &neg(b))
}

/// 同号比较量级；异号仅当两者都为零时相等（+0 == −0）
pub fn equalp(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::PosInt(v1), Value::PosInt(v2)) | (Value::NegInt(v1), Value::NegInt(v2)) => {
            Value::Bool(app!(bare::equalp(), v1.clone(), v2.clone()))
        }
        (Value::PosInt(v1), Value::NegInt(v2)) | (Value::NegInt(v1), Value::PosInt(v2)) => {
            Value::Bool(app!(
                bare::and(),
                bare::is_zero().apply(v1.clone()),
                bare::is_zero().apply(v2.clone()),
            ))
        }
        _ => type_mismatch("EqualP", &[a, b]),
    }
}

pub fn is_zero(a: &Value) -> Value {
    match a {
        Value::PosInt(v) | Value::NegInt(v) => Value::Bool(bare::is_zero().apply(v.clone())),
        _ => type_mismatch("IsZero", &[a]),
    }
}

// ==================== 布尔 ====================

pub fn and(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Bool(b1), Value::Bool(b2)) => Value::Bool(app!(bare::and(), b1.clone(), b2.clone())),
        _ => type_mismatch("And", &[a, b]),
    }
}

pub fn or(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::Bool(b1), Value::Bool(b2)) => Value::Bool(app!(bare::or(), b1.clone(), b2.clone())),
        _ => type_mismatch("Or", &[a, b]),
    }
}

/// `If(test)(on_true)(on_false)`：只求值选中的分支
pub fn if_<T, F>(test: &Value, on_true: T, on_false: F) -> Value
where
    T: Fn() -> Value + 'static,
    F: Fn() -> Value + 'static,
{
    match test {
        Value::Bool(b) => select(b.clone(), on_true, on_false),
        _ => type_mismatch("If", &[test]),
    }
}

// ==================== 列表 ====================

pub fn is_empty(list: &Value) -> Value {
    match list {
        Value::List(l) => Value::Bool(bare::is_nil().apply(l.clone())),
        _ => type_mismatch("IsEmpty", &[list]),
    }
}

/// 首元素；空表得到 IndexError
pub fn head(list: &Value) -> Value {
    match list {
        Value::List(l) => {
            let picked = app!(
                l,
                Term::always(Value::index_error().embed()),
                Term::lam2(|head, _| head),
            );
            Value::reify(&picked)
        }
        _ => type_mismatch("Head", &[list]),
    }
}

/// 去掉首元素的 typed List；空表得到 IndexError
pub fn tail(list: &Value) -> Value {
    match list {
        Value::List(l) => {
            let picked = app!(
                l,
                Term::always(Value::index_error().embed()),
                Term::lam2(|_, tail| Value::List(tail).embed()),
            );
            Value::reify(&picked)
        }
        _ => type_mismatch("Tail", &[list]),
    }
}

pub fn len(list: &Value) -> Value {
    match list {
        Value::List(l) => Value::PosInt(bare::len().apply(l.clone())),
        _ => type_mismatch("Len", &[list]),
    }
}

/// 第 `n` 个元素，总是返回 ResultPair
pub fn elt(list: &Value, n: &Value) -> Value {
    match (list, n) {
        (Value::List(l), Value::PosInt(i)) => rewrap_lookup(app!(bare::elt(), l.clone(), i.clone())),
        _ => {
            type_mismatch("Elt", &[list, n]);
            Value::result_from(Value::void(), bare::type_error_id())
        }
    }
}

/// `Prepend(value)(list)`；只检查列表
pub fn prepend(value: &Value, list: &Value) -> Value {
    match list {
        Value::List(l) => Value::List(app!(bare::prepend(), value.embed(), l.clone())),
        _ => type_mismatch("Prepend", &[value, list]),
    }
}

/// `Append(list)(value)`；只检查列表
pub fn append(list: &Value, value: &Value) -> Value {
    match list {
        Value::List(l) => Value::List(app!(bare::append(), l.clone(), value.embed())),
        _ => type_mismatch("Append", &[list, value]),
    }
}

pub fn concat(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::List(l1), Value::List(l2)) => {
            Value::List(app!(bare::concat(), l1.clone(), l2.clone()))
        }
        _ => type_mismatch("Concat", &[a, b]),
    }
}

// ==================== 字符串 ====================

pub fn strlen(s: &Value) -> Value {
    match s {
        Value::String(chars) => Value::PosInt(bare::len().apply(chars.clone())),
        _ => type_mismatch("Strlen", &[s]),
    }
}

pub fn strcat(a: &Value, b: &Value) -> Value {
    match (a, b) {
        (Value::String(s1), Value::String(s2)) => {
            Value::String(app!(bare::concat(), s1.clone(), s2.clone()))
        }
        _ => type_mismatch("Strcat", &[a, b]),
    }
}

/// 第 `n` 个字符，总是返回 ResultPair
pub fn strchr(s: &Value, n: &Value) -> Value {
    match (s, n) {
        (Value::String(chars), Value::PosInt(i)) => {
            rewrap_lookup(app!(bare::elt(), chars.clone(), i.clone()))
        }
        _ => {
            type_mismatch("Strchr", &[s, n]);
            Value::result_from(Value::void(), bare::type_error_id())
        }
    }
}

// ==================== 结果对与序对 ====================

/// 成功时以 typed 载荷调用 `on_success`，失败时以 typed Error 调用 `on_fail`
pub fn on_result<S, F>(result: &Value, on_success: S, on_fail: F) -> Value
where
    S: Fn(Value) -> Value + 'static,
    F: Fn(Value) -> Value + 'static,
{
    match result {
        Value::ResultPair(rp) => {
            let chosen = app!(
                bare::on_result(),
                rp.clone(),
                Term::lam(move |value| on_success(Value::reify(&value)).embed()),
                Term::lam(move |errnum| on_fail(Value::Error(errnum)).embed()),
            );
            Value::reify(&chosen)
        }
        _ => type_mismatch("OnResult", &[result]),
    }
}

pub fn mk_pair(head: &Value, tail: &Value) -> Value {
    Value::pair_of(head, tail)
}
