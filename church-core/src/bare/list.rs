//! 列表算法
//!
//! 递归算法都写成 `fix(generator)`，generator 的第一个参数是递归闭包；
//! 每次递归消耗一个 cons 单元。下标从 0 开始，越界通过结果对报告 IndexError。

use super::boolean::void;
use super::fix::fix;
use super::numeral::{succ, zero};
use super::pair::{cons, nil};
use super::result::{index_error_id, no_error_id, on_result, result_pair};
use super::term::Term;
use crate::app;

pub fn prepend() -> Term {
    cons()
}

/// `Append(lst)(v)`：`v` 成为最后一个元素
pub fn append() -> Term {
    fix(Term::lam3(|rec, lst, value| {
        let last = value.clone();
        app!(
            lst,
            Term::lam(move |_| app!(cons(), last.clone(), nil())),
            Term::lam2(move |head, tail| app!(cons(), head, app!(rec, tail, value.clone()))),
        )
    }))
}

/// `Concat(lst1)(lst2)`：沿 `lst1` 递归，到空表时返回 `lst2`
pub fn concat() -> Term {
    fix(Term::lam3(|rec, lst1, lst2| {
        let rest = lst2.clone();
        app!(
            lst1,
            Term::always(lst2),
            Term::lam2(move |head, tail| app!(cons(), head, app!(rec, tail, rest.clone()))),
        )
    }))
}

pub fn len() -> Term {
    fix(Term::lam2(|rec, lst| {
        app!(
            lst,
            Term::lam(|_| zero()),
            Term::lam2(move |_, tail| succ().apply(rec.apply(tail))),
        )
    }))
}

// ==================== 下标访问（结果对协议） ====================

/// 把结果对中的列表前进一格；空表得到 IndexError，已有错误原样传递
pub fn next() -> Term {
    Term::lam(|rp| {
        app!(
            on_result(),
            rp.clone(),
            Term::lam(|lst| {
                app!(
                    lst,
                    Term::lam(|_| app!(result_pair(), void(), index_error_id())),
                    Term::lam2(|_, tail| app!(result_pair(), tail, no_error_id())),
                )
            }),
            Term::always(rp),
        )
    })
}

/// 前进 `n` 格后的 cons 单元
pub fn nth_cons() -> Term {
    Term::lam2(|lst, n| app!(n, next(), app!(result_pair(), lst, no_error_id())))
}

/// 第 `n` 个元素的结果对
pub fn elt() -> Term {
    Term::lam2(|lst, n| {
        let rp = app!(nth_cons(), lst, n);
        app!(
            on_result(),
            rp.clone(),
            Term::lam(|cell| {
                app!(
                    cell,
                    Term::lam(|_| app!(result_pair(), void(), index_error_id())),
                    Term::lam2(|head, _| app!(result_pair(), head, no_error_id())),
                )
            }),
            Term::always(rp),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bare::numeral::{eight, one, two};
    use crate::bare::result::{result_errval, result_val};
    use crate::test_support::{listify_nats, nat, nat_list, numerify};

    #[test]
    fn test_len() {
        assert_eq!(numerify(&len().apply(nil())), 0);
        assert_eq!(numerify(&len().apply(nat_list(&[1, 2]))), 2);
    }

    #[test]
    fn test_append() {
        let list = app!(prepend(), one(), app!(prepend(), two(), nil()));
        let extended = app!(append(), list, eight());
        assert_eq!(listify_nats(&extended), vec![1, 2, 8]);

        let one_element = app!(append(), nil(), nil());
        assert_eq!(numerify(&len().apply(one_element)), 1);
    }

    #[test]
    fn test_concat() {
        let joined = app!(concat(), nat_list(&[1, 2]), nat_list(&[3]));
        assert_eq!(listify_nats(&joined), vec![1, 2, 3]);
        let empty_left = app!(concat(), nil(), nat_list(&[4]));
        assert_eq!(listify_nats(&empty_left), vec![4]);
    }

    #[test]
    fn test_elt_in_range() {
        let list = nat_list(&[1, 2, 8]);
        let rp = app!(elt(), list.clone(), nat(2));
        assert_eq!(numerify(&result_errval().apply(rp.clone())), 0);
        assert_eq!(numerify(&result_val().apply(rp)), 8);

        let rp = app!(elt(), list, zero());
        assert_eq!(numerify(&result_val().apply(rp)), 1);
    }

    #[test]
    fn test_elt_out_of_range() {
        let list = nat_list(&[1, 2, 8]);
        for index in [3, 4, 23] {
            let rp = app!(elt(), list.clone(), nat(index));
            assert_eq!(numerify(&result_errval().apply(rp)), 2);
        }
        let rp = app!(elt(), nil(), zero());
        assert_eq!(numerify(&result_errval().apply(rp)), 2);
    }

    #[test]
    fn test_nth_cons_keeps_first_error() {
        // 越界之后继续前进，错误码保持不变
        let rp = app!(nth_cons(), nat_list(&[5]), nat(6));
        assert_eq!(numerify(&result_errval().apply(rp)), 2);
    }
}
