//! 序对与 cons 单元
//!
//! 序对接收组合函数 `c` 并调用 `c(head)(tail)`。
//! cons 列表接收 `(on_empty, on_pair)`：空表调用 `on_empty(void)`，
//! 否则调用 `on_pair(head)(tail)`，其中 `tail` 仍是 cons 列表。

use super::boolean::{fls, tru, void};
use super::term::Term;
use crate::app;

// ==================== 序对 ====================

pub fn pair() -> Term {
    Term::lam3(|head, tail, combine| app!(combine, head, tail))
}

pub fn pair_head() -> Term {
    Term::lam(|p| p.apply(Term::lam2(|head, _| head)))
}

pub fn pair_tail() -> Term {
    Term::lam(|p| p.apply(Term::lam2(|_, tail| tail)))
}

// ==================== cons 列表 ====================

pub fn nil() -> Term {
    Term::lam2(|on_empty, _| on_empty.apply(void()))
}

pub fn cons() -> Term {
    Term::lam4(|head, tail, _, on_pair| app!(on_pair, head, tail))
}

/// 空表的 head 是 `void`
pub fn cons_head() -> Term {
    Term::lam(|cell| app!(cell, void(), Term::lam2(|head, _| head)))
}

/// 空表的 tail 是 `void`
pub fn cons_tail() -> Term {
    Term::lam(|cell| app!(cell, void(), Term::lam2(|_, tail| tail)))
}

pub fn is_nil() -> Term {
    Term::lam(|cell| app!(cell, Term::lam(|_| tru()), Term::lam2(|_, _| fls())))
}
