//! Bare 层测试
//!
//! 只通过公开 API 组合闭包，再用探针观察结果

mod common;
use church_core::app;
use church_core::bare::*;
use common::{boolify, listify_nats, nat, nat_list, numerify, with_big_stack};
use std::cell::Cell;
use std::rc::Rc;

// ===== 布尔与条件 =====

#[test]
fn test_void_and_zero_are_inert() {
    let marker = Term::atom("foo");
    assert!(void().apply(marker.clone()).ptr_eq(&marker));

    // zero 从不调用 f
    let called = Rc::new(Cell::new(false));
    let flag = Rc::clone(&called);
    let fail = Term::lam(move |x| {
        flag.set(true);
        x
    });
    let out = app!(zero(), fail, marker.clone());
    assert!(out.ptr_eq(&marker));
    assert!(!called.get());
}

#[test]
fn test_if_only_runs_selected_branch() {
    let one = Term::atom(1u8);
    let two = Term::atom(2u8);
    let fail = Term::lam(|_| panic!("unselected branch evaluated"));

    let picked = app!(if_(), tru(), Term::always(one), fail.clone());
    assert_eq!(picked.downcast_ref::<u8>(), Some(&1));
    let picked = app!(if_(), fls(), fail, Term::always(two));
    assert_eq!(picked.downcast_ref::<u8>(), Some(&2));
}

#[test]
fn test_bool_truth_tables() {
    let cases = [(false, false), (false, true), (true, false), (true, true)];
    let church = |b: bool| if b { tru() } else { fls() };
    for (a, b) in cases {
        assert_eq!(boolify(&app!(and(), church(a), church(b))), a && b);
        assert_eq!(boolify(&app!(or(), church(a), church(b))), a || b);
        assert_eq!(boolify(&app!(xor(), church(a), church(b))), a ^ b);
    }
    assert!(!boolify(&not().apply(tru())));
    assert!(!boolify(&not().apply(not().apply(fls()))));
}

#[test]
fn test_compound_logic() {
    let expr = app!(
        and(),
        app!(or(), tru(), fls()),
        not().apply(app!(xor(), tru(), tru())),
    );
    assert!(boolify(&expr));
}

// ===== 数字 =====

#[test]
fn test_small_numerals() {
    assert_eq!(numerify(&one()), 1);
    assert_eq!(numerify(&two()), 2);
    assert_eq!(numerify(&three()), 3);
    assert_eq!(numerify(&four()), 4);
    assert_eq!(numerify(&ten()), 10);
}

#[test]
fn test_arithmetic() {
    assert_eq!(numerify(&app!(add(), ten(), ten())), 20);
    assert_eq!(numerify(&app!(add(), ten(), zero())), 10);
    assert_eq!(numerify(&app!(add(), zero(), zero())), 0);

    assert_eq!(numerify(&app!(mult(), ten(), ten())), 100);
    assert_eq!(numerify(&app!(mult(), zero(), ten())), 0);

    assert_eq!(numerify(&app!(sub(), zero(), zero())), 0);
    assert_eq!(numerify(&app!(sub(), ten(), zero())), 10);
    assert_eq!(numerify(&app!(sub(), ten(), five())), 5);
    // 饱和减法
    assert_eq!(numerify(&app!(sub(), three(), ten())), 0);
    assert_eq!(numerify(&pred().apply(zero())), 0);
}

#[test]
fn test_comparisons() {
    assert!(boolify(&is_zero().apply(zero())));
    assert!(!boolify(&is_zero().apply(one())));

    assert!(boolify(&app!(equalp(), ten(), ten())));
    assert!(!boolify(&app!(equalp(), ten(), nine())));
    assert!(!boolify(&app!(equalp(), nine(), ten())));
    assert!(!boolify(&app!(equalp(), zero(), one())));
    assert!(boolify(&app!(equalp(), zero(), zero())));

    assert!(boolify(&app!(leq(), ten(), ten())));
    assert!(boolify(&app!(leq(), zero(), ten())));
    assert!(!boolify(&app!(leq(), ten(), zero())));

    assert!(boolify(&app!(geq(), ten(), zero())));
    assert!(!boolify(&app!(geq(), zero(), ten())));

    assert!(!boolify(&app!(lt(), ten(), ten())));
    assert!(boolify(&app!(lt(), zero(), ten())));

    assert!(!boolify(&app!(gt(), zero(), zero())));
    assert!(boolify(&app!(gt(), ten(), zero())));
}

// ===== 列表 =====

#[test]
fn test_lists() {
    assert!(listify_nats(&nil()).is_empty());
    let list = app!(prepend(), one(), app!(prepend(), two(), nil()));
    assert_eq!(listify_nats(&list), vec![1, 2]);
    assert_eq!(numerify(&len().apply(list.clone())), 2);
    assert_eq!(numerify(&cons_head().apply(cons_tail().apply(list.clone()))), 2);

    assert!(!boolify(&is_nil().apply(list.clone())));
    assert!(boolify(&is_nil().apply(nil())));
    assert!(boolify(&is_nil().apply(cons_tail().apply(cons_tail().apply(list.clone())))));

    let extended = app!(append(), list, eight());
    assert_eq!(listify_nats(&extended), vec![1, 2, 8]);
    assert_eq!(numerify(&len().apply(app!(append(), nil(), nil()))), 1);

    let picked = app!(elt(), extended.clone(), two());
    assert!(!boolify(&result_was_err().apply(picked.clone())));
    assert_eq!(numerify(&result_val().apply(picked)), 8);

    let missing = app!(elt(), extended, nat(5));
    assert!(boolify(&result_was_err().apply(missing.clone())));
    assert_eq!(numerify(&result_errval().apply(missing)), 2);
}

#[test]
fn test_long_list_len() {
    with_big_stack(|| {
        let items = vec![6u64; 200];
        assert_eq!(numerify(&len().apply(nat_list(&items))), 200);
    });
}

#[test]
fn test_concat_lists() {
    let joined = app!(concat(), nat_list(&[1, 2]), nat_list(&[3]));
    assert_eq!(listify_nats(&joined), vec![1, 2, 3]);
    assert_eq!(listify_nats(&app!(concat(), nil(), nat_list(&[4]))), vec![4]);
}

// ===== 结果对 =====

#[test]
fn test_on_result_dispatch() {
    let ok = app!(result_pair(), nat(7), no_error_id());
    let err = app!(result_pair(), void(), type_error_id());

    let on_success = Term::lam(|v| succ().apply(v));
    let on_fail = Term::lam(|code| app!(add(), code, ten()));

    assert_eq!(numerify(&app!(on_result(), ok, on_success.clone(), on_fail.clone())), 8);
    assert_eq!(numerify(&app!(on_result(), err, on_success, on_fail)), 11);
}

#[test]
fn test_fix_recursion() {
    // 求和 0..=n
    let sum_to = fix(Term::lam2(|rec, n| {
        let m = n.clone();
        app!(
            if_(),
            is_zero().apply(n),
            Term::lam(|_| zero()),
            Term::lam(move |_| app!(add(), m.clone(), rec.apply(pred().apply(m.clone())))),
        )
    }));
    assert_eq!(numerify(&sum_to.apply(nat(10))), 55);
}

#[test]
fn test_pairs() {
    let p = app!(pair(), one(), two());
    assert_eq!(numerify(&pair_head().apply(p.clone())), 1);
    assert_eq!(numerify(&pair_tail().apply(p)), 2);
}
