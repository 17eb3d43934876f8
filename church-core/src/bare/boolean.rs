//! 布尔组合子
//!
//! 布尔值是接收 `(on_true, on_false)` 的闭包，只调用其中一个并传入 `void`。

use super::term::Term;
use crate::app;

/// 恒等函数，约定的"空"载荷
pub fn void() -> Term {
    Term::lam(|x| x)
}

/// `λt.λf. t(void)`
pub fn tru() -> Term {
    Term::lam2(|on_true, _| on_true.apply(void()))
}

/// `λt.λf. f(void)`
pub fn fls() -> Term {
    Term::lam2(|_, on_false| on_false.apply(void()))
}

/// `If(test)(on_true)(on_false)` = `test(on_true)(on_false)`
pub fn if_() -> Term {
    Term::lam3(|test, on_true, on_false| app!(test, on_true, on_false))
}

pub fn not() -> Term {
    Term::lam3(|b, on_true, on_false| app!(b, on_false, on_true))
}

pub fn and() -> Term {
    Term::lam2(|b1, b2| app!(b1, Term::always(b2), Term::lam(|_| fls())))
}

pub fn or() -> Term {
    Term::lam2(|b1, b2| app!(b1, Term::lam(|_| tru()), Term::always(b2)))
}

pub fn xor() -> Term {
    Term::lam2(|b1, b2| {
        let flipped = b2.clone();
        app!(
            b1,
            Term::lam(move |_| not().apply(flipped.clone())),
            Term::always(b2),
        )
    })
}
