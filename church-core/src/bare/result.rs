//! 结果对 `(value, errnum)`
//!
//! 代替异常的错误协议。`errnum` 为零时 `value` 有意义，
//! 否则 `value` 未定义，只能读取错误码。

use super::boolean::{if_, not};
use super::numeral::{is_zero, one, two, zero};
use super::pair::{pair, pair_head, pair_tail};
use super::term::Term;
use crate::app;

// ==================== 错误码 ====================

pub fn no_error_id() -> Term {
    zero()
}

pub fn type_error_id() -> Term {
    one()
}

pub fn index_error_id() -> Term {
    two()
}

// ==================== 构造与访问 ====================

/// `ResultPair(value)(errnum)`
pub fn result_pair() -> Term {
    pair()
}

pub fn result_val() -> Term {
    pair_head()
}

pub fn result_errval() -> Term {
    pair_tail()
}

/// 错误码非零时为真
pub fn result_was_err() -> Term {
    Term::lam(|rp| not().apply(is_zero().apply(result_errval().apply(rp))))
}

/// `OnResult(rp)(on_success)(on_fail)`：
/// 成功时调用 `on_success(value)`，否则调用 `on_fail(errnum)`
pub fn on_result() -> Term {
    Term::lam3(|rp, on_success, on_fail| {
        rp.apply(Term::lam2(move |value, errnum| {
            let on_success = on_success.clone();
            let on_fail = on_fail.clone();
            let code = errnum.clone();
            app!(
                if_(),
                is_zero().apply(errnum),
                Term::lam(move |_| on_success.apply(value.clone())),
                Term::lam(move |_| on_fail.apply(code.clone())),
            )
        }))
    })
}
