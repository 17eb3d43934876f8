//! Peano（Church）数
//!
//! 自然数 n 是接收 `(f, z)` 并返回 `f` 作用 n 次于 `z` 的闭包。
//! 所有运算都是 O(n) 级别；减法在 0 处饱和。

use super::boolean::{and, fls, not, tru};
use super::term::Term;
use crate::app;

// ==================== 基础构造 ====================

pub fn zero() -> Term {
    Term::lam2(|_, z| z)
}

/// `succ(n) = λf.λz. f(n(f)(z))`
pub fn succ() -> Term {
    Term::lam3(|n, f, z| {
        let inner = app!(n, f.clone(), z);
        f.apply(inner)
    })
}

pub fn one() -> Term {
    succ().apply(zero())
}

pub fn two() -> Term {
    succ().apply(one())
}

pub fn three() -> Term {
    succ().apply(two())
}

pub fn four() -> Term {
    succ().apply(three())
}

pub fn five() -> Term {
    succ().apply(four())
}

pub fn six() -> Term {
    succ().apply(five())
}

pub fn seven() -> Term {
    succ().apply(six())
}

pub fn eight() -> Term {
    succ().apply(seven())
}

pub fn nine() -> Term {
    succ().apply(eight())
}

pub fn ten() -> Term {
    succ().apply(nine())
}

// ==================== 算术 ====================

/// `λn.λm.λf.λz. n(f)(m(f)(z))`
pub fn add() -> Term {
    Term::lam4(|n, m, f, z| {
        let rest = app!(m, f.clone(), z);
        app!(n, f, rest)
    })
}

/// `λn.λm.λf.λz. n(m(f))(z)`
pub fn mult() -> Term {
    Term::lam4(|n, m, f, z| app!(n, m.apply(f), z))
}

/// 前驱。第一步被 `λu.z` 吸收，之后每一步转发上一步的结果；`pred(0) = 0`。
pub fn pred() -> Term {
    Term::lam3(|n, f, z| {
        let step = Term::lam2(move |g, h| h.apply(g.apply(f.clone())));
        app!(n, step, Term::always(z), Term::lam(|u| u))
    })
}

/// `n - m`，`m > n` 时饱和为 0
pub fn sub() -> Term {
    Term::lam2(|n, m| app!(m, pred(), n))
}

// ==================== 比较 ====================

pub fn is_zero() -> Term {
    Term::lam(|n| app!(n, Term::lam(|_| fls()), tru()))
}

/// `n ≤ m ⟺ IsZero(n - m)`
pub fn leq() -> Term {
    Term::lam2(|n1, n2| is_zero().apply(app!(sub(), n1, n2)))
}

pub fn geq() -> Term {
    Term::lam2(|n1, n2| is_zero().apply(app!(sub(), n2, n1)))
}

pub fn lt() -> Term {
    Term::lam2(|n1, n2| not().apply(app!(geq(), n1, n2)))
}

pub fn gt() -> Term {
    Term::lam2(|n1, n2| not().apply(app!(leq(), n1, n2)))
}

pub fn equalp() -> Term {
    Term::lam2(|n1, n2| {
        app!(
            and(),
            app!(leq(), n1.clone(), n2.clone()),
            app!(geq(), n1, n2),
        )
    })
}
