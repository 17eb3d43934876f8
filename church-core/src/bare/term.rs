//! 闭包项（Bare 层的唯一值类型）
//!
//! 所有 bare 值都是 `Term`：一个接收 `Term`、返回 `Term` 的不可变闭包。
//! 另有一个惰性的 `Atom` 形式，只用来在 bare 结构（列表单元、序对、结果对）
//! 里携带宿主数据，例如嵌入的 typed 值。

use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// 闭包编码的值
#[derive(Clone)]
pub enum Term {
    /// 单参闭包
    Lam(Rc<dyn Fn(Term) -> Term>),
    /// 不透明载荷；作为函数调用时原样返回自身
    Atom(Rc<dyn Any>),
}

impl Term {
    // ==================== 构造 ====================

    /// 单参闭包
    pub fn lam<F>(f: F) -> Self
    where
        F: Fn(Term) -> Term + 'static,
    {
        Term::Lam(Rc::new(f))
    }

    /// 柯里化的双参闭包: `λa.λb. f(a, b)`
    pub fn lam2<F>(f: F) -> Self
    where
        F: Fn(Term, Term) -> Term + 'static,
    {
        let f = Rc::new(f);
        Term::lam(move |a| {
            let f = Rc::clone(&f);
            Term::lam(move |b| f(a.clone(), b))
        })
    }

    /// 柯里化的三参闭包
    pub fn lam3<F>(f: F) -> Self
    where
        F: Fn(Term, Term, Term) -> Term + 'static,
    {
        let f = Rc::new(f);
        Term::lam(move |a| {
            let f = Rc::clone(&f);
            Term::lam2(move |b, c| f(a.clone(), b, c))
        })
    }

    /// 柯里化的四参闭包
    pub fn lam4<F>(f: F) -> Self
    where
        F: Fn(Term, Term, Term, Term) -> Term + 'static,
    {
        let f = Rc::new(f);
        Term::lam(move |a| {
            let f = Rc::clone(&f);
            Term::lam3(move |b, c, d| f(a.clone(), b, c, d))
        })
    }

    /// 常量闭包 `λ_. value`（K 组合子）
    pub fn always(value: Term) -> Self {
        Term::lam(move |_| value.clone())
    }

    /// 包装宿主载荷
    pub fn atom<T: Any>(payload: T) -> Self {
        Term::Atom(Rc::new(payload))
    }

    // ==================== 求值 ====================

    /// 以 `arg` 调用本项
    #[inline]
    pub fn apply(&self, arg: Term) -> Term {
        match self {
            Term::Lam(f) => f(arg),
            Term::Atom(_) => self.clone(),
        }
    }

    // ==================== 载荷访问 ====================

    /// 取出 `Atom` 载荷（类型不符或不是 `Atom` 时为 `None`）
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Term::Atom(payload) => payload.downcast_ref::<T>(),
            Term::Lam(_) => None,
        }
    }

    /// 两个项是否共享同一份分配
    pub fn ptr_eq(&self, other: &Term) -> bool {
        match (self, other) {
            (Term::Lam(a), Term::Lam(b)) => Rc::ptr_eq(a, b),
            (Term::Atom(a), Term::Atom(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Lam(_) => write!(f, "Term::Lam(..)"),
            Term::Atom(_) => write!(f, "Term::Atom(..)"),
        }
    }
}

/// 依次应用参数: `app!(f, a, b)` 即 `f.apply(a).apply(b)`
#[macro_export]
macro_rules! app {
    ($f:expr $(, $arg:expr)+ $(,)?) => {
        ($f)$(.apply($arg))+
    };
}
