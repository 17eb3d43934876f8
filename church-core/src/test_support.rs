//! 单元测试辅助：构造与观察 bare 值
//!
//! 观察函数与宿主边界共用 `bare::host` 的实现。

use crate::app;
use crate::bare::{cons, nil, succ, zero, Term};

pub(crate) use crate::bare::host::{boolify, listify, numerify};

/// 由 `succ` 逐次构造的 numeral
pub(crate) fn nat(n: u64) -> Term {
    (0..n).fold(zero(), |acc, _| succ().apply(acc))
}

pub(crate) fn nat_list(items: &[u64]) -> Term {
    items
        .iter()
        .rev()
        .fold(nil(), |tail, &n| app!(cons(), nat(n), tail))
}

pub(crate) fn listify_nats(lst: &Term) -> Vec<u64> {
    listify(lst).iter().map(numerify).collect()
}
