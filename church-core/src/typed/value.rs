//! Typed 值
//!
//! 每个 bare 值都附带一个类型标签。标签用原生枚举表示，
//! 运算通过模式匹配检查标签后再解释 bare 载荷。
//!
//! typed 值放进 bare 结构（列表、序对、结果对）时用 `embed` 包装成
//! `Term::Atom`，取出时用 `reify` 还原。

use super::tag::TypeTag;
use crate::app;
use crate::bare::{self, Term};
use crate::error::ErrorCode;

/// 带类型标签的值；载荷均为 bare 项
#[derive(Debug, Clone)]
pub enum Value {
    Void,
    /// bare 布尔
    Bool(Term),
    /// 非负量级
    PosInt(Term),
    /// 负号标签下的量级
    NegInt(Term),
    /// 元素为嵌入 typed 值的 cons 列表
    List(Term),
    /// 两个嵌入 typed 值组成的序对
    Pair(Term),
    /// bare 结果对，value 为嵌入 typed 值
    ResultPair(Term),
    /// 字符序数
    Char(Term),
    /// 元素为嵌入 `Char` 的 cons 列表
    String(Term),
    /// 错误码 numeral
    Error(Term),
}

impl Value {
    // ==================== 常量 ====================

    pub fn void() -> Self {
        Value::Void
    }

    pub fn tru() -> Self {
        Value::Bool(bare::tru())
    }

    pub fn fls() -> Self {
        Value::Bool(bare::fls())
    }

    pub fn zero() -> Self {
        Value::PosInt(bare::zero())
    }

    pub fn error(code: ErrorCode) -> Self {
        Value::Error(code.numeral())
    }

    pub fn no_error() -> Self {
        Self::error(ErrorCode::NoError)
    }

    pub fn type_error() -> Self {
        Self::error(ErrorCode::TypeError)
    }

    pub fn index_error() -> Self {
        Self::error(ErrorCode::IndexError)
    }

    pub fn empty_list() -> Self {
        Value::List(bare::nil())
    }

    pub fn empty_string() -> Self {
        Value::String(bare::nil())
    }

    // ==================== 构造 ====================

    /// 由 typed 值和错误 numeral 组成结果对
    pub fn result_from(value: Value, errnum: Term) -> Self {
        Value::ResultPair(app!(bare::result_pair(), value.embed(), errnum))
    }

    /// 两个 typed 值组成的序对
    pub fn pair_of(head: &Value, tail: &Value) -> Self {
        Value::Pair(app!(bare::pair(), head.embed(), tail.embed()))
    }

    // ==================== 访问 ====================

    pub fn tag(&self) -> TypeTag {
        match self {
            Value::Void => TypeTag::Void,
            Value::Bool(_) => TypeTag::Bool,
            Value::PosInt(_) => TypeTag::PosInt,
            Value::NegInt(_) => TypeTag::NegInt,
            Value::List(_) => TypeTag::List,
            Value::Pair(_) => TypeTag::Pair,
            Value::ResultPair(_) => TypeTag::ResultPair,
            Value::Char(_) => TypeTag::Char,
            Value::String(_) => TypeTag::String,
            Value::Error(_) => TypeTag::Error,
        }
    }

    /// bare 载荷（`Void` 为 bare void）
    pub fn bare(&self) -> Term {
        match self {
            Value::Void => bare::void(),
            Value::Bool(v)
            | Value::PosInt(v)
            | Value::NegInt(v)
            | Value::List(v)
            | Value::Pair(v)
            | Value::ResultPair(v)
            | Value::Char(v)
            | Value::String(v)
            | Value::Error(v) => v.clone(),
        }
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Value::PosInt(_) | Value::NegInt(_))
    }

    // ==================== 嵌入 ====================

    /// 包装成可放入 bare 结构的项
    pub fn embed(&self) -> Term {
        Term::atom(self.clone())
    }

    /// 取出嵌入的 typed 值
    pub fn from_term(term: &Term) -> Option<Value> {
        term.downcast_ref::<Value>().cloned()
    }

    /// 同 `from_term`，不是 typed 值时得到 TypeError
    pub fn reify(term: &Term) -> Value {
        Self::from_term(term).unwrap_or_else(Value::type_error)
    }
}

// ==================== 类型谓词 ====================

/// 比较标签 numeral，得到 bare 布尔
fn compare_tag(value: &Value, expected: TypeTag) -> Term {
    app!(bare::equalp(), value.tag().numeral(), expected.numeral())
}

macro_rules! type_predicates {
    ($($name:ident => $tag:ident),* $(,)?) => {
        $(
            #[doc = concat!("标签为 `", stringify!($tag), "` 时为 typed TRUE")]
            pub fn $name(value: &Value) -> Value {
                Value::Bool(compare_tag(value, TypeTag::$tag))
            }
        )*
    };
}

type_predicates! {
    is_void => Void,
    is_bool => Bool,
    is_pos_int => PosInt,
    is_neg_int => NegInt,
    is_list => List,
    is_pair => Pair,
    is_result_pair => ResultPair,
    is_char => Char,
    is_string => String,
    is_error => Error,
}

/// `PosInt` 或 `NegInt`
pub fn is_int(value: &Value) -> Value {
    Value::Bool(app!(
        bare::or(),
        compare_tag(value, TypeTag::PosInt),
        compare_tag(value, TypeTag::NegInt),
    ))
}

/// 标签编号，作为 typed PosInt
pub fn type_of(value: &Value) -> Value {
    Value::PosInt(value.tag().numeral())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{boolify, nat, numerify};

    fn truth(value: &Value) -> bool {
        match value {
            Value::Bool(b) => boolify(b),
            other => panic!("expected Bool, got {other:?}"),
        }
    }

    #[test]
    fn test_type_predicates() {
        assert!(truth(&is_void(&Value::void())));
        assert!(truth(&is_bool(&Value::fls())));
        assert!(truth(&is_bool(&Value::tru())));
        assert!(!truth(&is_bool(&Value::void())));
        assert!(!truth(&is_list(&Value::type_error())));
        assert!(truth(&is_error(&Value::type_error())));
        assert!(truth(&is_int(&Value::zero())));
        assert!(truth(&is_int(&Value::NegInt(nat(3)))));
        assert!(!truth(&is_int(&Value::empty_list())));
        assert!(truth(&is_list(&Value::empty_list())));
        assert!(truth(&is_string(&Value::empty_string())));
    }

    #[test]
    fn test_type_of() {
        match type_of(&Value::Char(nat(65))) {
            Value::PosInt(n) => assert_eq!(numerify(&n), 8),
            other => panic!("expected PosInt, got {other:?}"),
        }
    }

    #[test]
    fn test_embed_reify() {
        let original = Value::PosInt(nat(4));
        let term = original.embed();
        let back = Value::reify(&term);
        assert_eq!(back.tag(), TypeTag::PosInt);
        assert_eq!(numerify(&back.bare()), 4);
        assert_eq!(Value::reify(&bare::zero()).tag(), TypeTag::Error);
    }
}
