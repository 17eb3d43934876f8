//! 不动点组合子
//!
//! `Y(F) = F(λx. Y(F)(x))`。生成器 `F` 的第一个参数是"自己的递归闭包"，
//! 每次调用时通过自应用重新推导，不需要具名递归。

use super::term::Term;
use crate::app;

/// `(λf.λF. F(λx. f(f)(F)(x)))` 应用于自身
pub fn y() -> Term {
    let half = Term::lam2(|f, generator| {
        let recurse = {
            let generator = generator.clone();
            Term::lam(move |x| app!(f, f.clone(), generator.clone(), x))
        };
        generator.apply(recurse)
    });
    half.apply(half.clone())
}

/// `Y(generator)`
pub fn fix(generator: Term) -> Term {
    y().apply(generator)
}
