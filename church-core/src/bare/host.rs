//! 宿主边界：由 Rust 值构造 bare 值，以及用探针闭包观察 bare 值
//!
//! `numeral(n)` 与 n 次 `succ` 外延相同，但 `f` 在循环里作用 n 次，
//! 调用它不会随 n 增长栈深度。提取函数把计数或记录副作用的闭包
//! 传给 bare 值，再读出探针状态。

use super::boolean::{fls, tru};
use super::pair::{cons, nil, pair_head, pair_tail};
use super::term::Term;
use crate::app;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

// ==================== 构造 ====================

/// `λf.λz. f(f(..f(z)))`，`f` 作用 `n` 次
pub fn numeral(n: u64) -> Term {
    Term::lam2(move |f, z| (0..n).fold(z, |acc, _| f.apply(acc)))
}

pub fn boolean(b: bool) -> Term {
    if b {
        tru()
    } else {
        fls()
    }
}

/// 按顺序组成 cons 列表
pub fn list(items: Vec<Term>) -> Term {
    items
        .into_iter()
        .rev()
        .fold(nil(), |tail, head| app!(cons(), head, tail))
}

// ==================== 观察 ====================

/// 数出 numeral 调用 `f` 的次数
pub fn numerify(n: &Term) -> u64 {
    let count = Rc::new(Cell::new(0u64));
    let counter = Rc::clone(&count);
    app!(
        n,
        Term::lam(move |x| {
            counter.set(counter.get() + 1);
            x
        }),
        Term::lam(|x| x),
    );
    count.get()
}

pub fn boolify(b: &Term) -> bool {
    let taken = Rc::new(Cell::new(false));
    let marker = Rc::clone(&taken);
    app!(
        b,
        Term::lam(move |x| {
            marker.set(true);
            x
        }),
        Term::lam(|x| x),
    );
    taken.get()
}

/// 依次取出 cons 列表的元素
pub fn listify(list: &Term) -> Vec<Term> {
    let mut items = Vec::new();
    let mut cursor = list.clone();
    loop {
        let slot: Rc<RefCell<Option<(Term, Term)>>> = Rc::default();
        let writer = Rc::clone(&slot);
        app!(
            cursor,
            Term::lam(|x| x),
            Term::lam2(move |head, tail| {
                *writer.borrow_mut() = Some((head, tail.clone()));
                tail
            }),
        );
        let cell = slot.borrow_mut().take();
        match cell {
            Some((head, tail)) => {
                items.push(head);
                cursor = tail;
            }
            None => return items,
        }
    }
}

pub fn unpairify(pair: &Term) -> (Term, Term) {
    (
        pair_head().apply(pair.clone()),
        pair_tail().apply(pair.clone()),
    )
}
