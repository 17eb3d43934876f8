//! 操作注册表
//!
//! 所有 typed 运算按名称登记，附带参数个数，供 `run` 和 CLI 按名调用。

use crate::error::ChurchError;
use church_core::typed::{self, Value};
use std::fmt;
use std::str::FromStr;

/// 可按名调用的 typed 运算
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    // ===== 算术 =====
    Add,
    Sub,
    Mult,
    Neg,
    EqualP,
    IsZero,

    // ===== 布尔 =====
    And,
    Or,
    /// `If(test, a, b)`：两个分支都是已求值的宿主值
    If,

    // ===== 列表 =====
    Head,
    Tail,
    Len,
    Elt,
    Prepend,
    Append,
    Concat,
    IsEmpty,

    // ===== 字符串 =====
    Strlen,
    Strcat,
    Strchr,

    // ===== 结果对与序对 =====
    /// 以恒等续延展开结果对：成功得到载荷，失败得到 typed Error
    OnResult,
    MkPair,

    // ===== 类型 =====
    IsVoid,
    IsBool,
    IsInt,
    IsPosInt,
    IsNegInt,
    IsList,
    IsPair,
    IsResultPair,
    IsChar,
    IsString,
    IsError,
    TypeOf,
    /// 原样返回参数，用于检查转换
    Id,
}

impl Operation {
    pub const ALL: [Operation; 35] = [
        Operation::Add,
        Operation::Sub,
        Operation::Mult,
        Operation::Neg,
        Operation::EqualP,
        Operation::IsZero,
        Operation::And,
        Operation::Or,
        Operation::If,
        Operation::Head,
        Operation::Tail,
        Operation::Len,
        Operation::Elt,
        Operation::Prepend,
        Operation::Append,
        Operation::Concat,
        Operation::IsEmpty,
        Operation::Strlen,
        Operation::Strcat,
        Operation::Strchr,
        Operation::OnResult,
        Operation::MkPair,
        Operation::IsVoid,
        Operation::IsBool,
        Operation::IsInt,
        Operation::IsPosInt,
        Operation::IsNegInt,
        Operation::IsList,
        Operation::IsPair,
        Operation::IsResultPair,
        Operation::IsChar,
        Operation::IsString,
        Operation::IsError,
        Operation::TypeOf,
        Operation::Id,
    ];

    /// 运算名
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "Add",
            Operation::Sub => "Sub",
            Operation::Mult => "Mult",
            Operation::Neg => "Neg",
            Operation::EqualP => "EqualP",
            Operation::IsZero => "IsZero",
            Operation::And => "And",
            Operation::Or => "Or",
            Operation::If => "If",
            Operation::Head => "Head",
            Operation::Tail => "Tail",
            Operation::Len => "Len",
            Operation::Elt => "Elt",
            Operation::Prepend => "Prepend",
            Operation::Append => "Append",
            Operation::Concat => "Concat",
            Operation::IsEmpty => "IsEmpty",
            Operation::Strlen => "Strlen",
            Operation::Strcat => "Strcat",
            Operation::Strchr => "Strchr",
            Operation::OnResult => "OnResult",
            Operation::MkPair => "MkPair",
            Operation::IsVoid => "IsVoid",
            Operation::IsBool => "IsBool",
            Operation::IsInt => "IsInt",
            Operation::IsPosInt => "IsPosInt",
            Operation::IsNegInt => "IsNegInt",
            Operation::IsList => "IsList",
            Operation::IsPair => "IsPair",
            Operation::IsResultPair => "IsResultPair",
            Operation::IsChar => "IsChar",
            Operation::IsString => "IsString",
            Operation::IsError => "IsError",
            Operation::TypeOf => "TypeOf",
            Operation::Id => "Id",
        }
    }

    /// 参数个数
    pub fn arity(&self) -> usize {
        match self {
            Operation::If => 3,
            Operation::Add
            | Operation::Sub
            | Operation::Mult
            | Operation::EqualP
            | Operation::And
            | Operation::Or
            | Operation::Elt
            | Operation::Prepend
            | Operation::Append
            | Operation::Concat
            | Operation::Strcat
            | Operation::Strchr
            | Operation::MkPair => 2,
            _ => 1,
        }
    }

    /// 检查参数个数
    pub fn check_arity(&self, found: usize) -> Result<(), ChurchError> {
        if found == self.arity() {
            Ok(())
        } else {
            Err(ChurchError::Arity {
                op: self.name(),
                expected: self.arity(),
                found,
            })
        }
    }

    /// 对 typed 参数求值；参数个数须已检查
    pub fn apply(&self, args: &[Value]) -> Value {
        match self {
            Operation::Add => typed::add(&args[0], &args[1]),
            Operation::Sub => typed::sub(&args[0], &args[1]),
            Operation::Mult => typed::mult(&args[0], &args[1]),
            Operation::Neg => typed::neg(&args[0]),
            Operation::EqualP => typed::equalp(&args[0], &args[1]),
            Operation::IsZero => typed::is_zero(&args[0]),
            Operation::And => typed::and(&args[0], &args[1]),
            Operation::Or => typed::or(&args[0], &args[1]),
            Operation::If => {
                let (on_true, on_false) = (args[1].clone(), args[2].clone());
                typed::if_(&args[0], move || on_true.clone(), move || on_false.clone())
            }
            Operation::Head => typed::head(&args[0]),
            Operation::Tail => typed::tail(&args[0]),
            Operation::Len => typed::len(&args[0]),
            Operation::Elt => typed::elt(&args[0], &args[1]),
            Operation::Prepend => typed::prepend(&args[0], &args[1]),
            Operation::Append => typed::append(&args[0], &args[1]),
            Operation::Concat => typed::concat(&args[0], &args[1]),
            Operation::IsEmpty => typed::is_empty(&args[0]),
            Operation::Strlen => typed::strlen(&args[0]),
            Operation::Strcat => typed::strcat(&args[0], &args[1]),
            Operation::Strchr => typed::strchr(&args[0], &args[1]),
            Operation::OnResult => typed::on_result(&args[0], |value| value, |error| error),
            Operation::MkPair => typed::mk_pair(&args[0], &args[1]),
            Operation::IsVoid => typed::is_void(&args[0]),
            Operation::IsBool => typed::is_bool(&args[0]),
            Operation::IsInt => typed::is_int(&args[0]),
            Operation::IsPosInt => typed::is_pos_int(&args[0]),
            Operation::IsNegInt => typed::is_neg_int(&args[0]),
            Operation::IsList => typed::is_list(&args[0]),
            Operation::IsPair => typed::is_pair(&args[0]),
            Operation::IsResultPair => typed::is_result_pair(&args[0]),
            Operation::IsChar => typed::is_char(&args[0]),
            Operation::IsString => typed::is_string(&args[0]),
            Operation::IsError => typed::is_error(&args[0]),
            Operation::TypeOf => typed::type_of(&args[0]),
            Operation::Id => args[0].clone(),
        }
    }
}

impl FromStr for Operation {
    type Err = ChurchError;

    /// 名称不区分大小写，允许下划线（如 `is_empty`）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.chars().filter(|c| *c != '_').collect();
        Operation::ALL
            .iter()
            .copied()
            .find(|op| op.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| ChurchError::UnknownOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_names() {
        assert_eq!("Add".parse::<Operation>().unwrap(), Operation::Add);
        assert_eq!("equalp".parse::<Operation>().unwrap(), Operation::EqualP);
        assert_eq!("is_empty".parse::<Operation>().unwrap(), Operation::IsEmpty);
        assert_eq!("TYPEOF".parse::<Operation>().unwrap(), Operation::TypeOf);
        assert!(matches!(
            "Divide".parse::<Operation>(),
            Err(ChurchError::UnknownOperation(name)) if name == "Divide"
        ));
    }

    #[test]
    fn test_names_are_unique() {
        for op in Operation::ALL {
            assert_eq!(op.name().parse::<Operation>().unwrap(), op);
            assert_eq!(op.to_string(), op.name());
        }
    }

    #[test]
    fn test_arity() {
        assert_eq!(Operation::If.arity(), 3);
        assert_eq!(Operation::Strchr.arity(), 2);
        assert_eq!(Operation::Len.arity(), 1);
        assert!(Operation::Add.check_arity(2).is_ok());
        assert!(matches!(
            Operation::Add.check_arity(3),
            Err(ChurchError::Arity { op: "Add", expected: 2, found: 3 })
        ));
    }
}
