//! 类型标签
//!
//! 固定的十种标签。数值编号沿用 `TypeOf` 的约定（Void = 1 … Error = 10）。

use crate::bare::{self, Term};
use std::fmt;

/// typed 值的判别式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Void = 1,
    Bool = 2,
    PosInt = 3,
    NegInt = 4,
    List = 5,
    Pair = 6,
    ResultPair = 7,
    Char = 8,
    String = 9,
    Error = 10,
}

impl TypeTag {
    pub const ALL: [TypeTag; 10] = [
        TypeTag::Void,
        TypeTag::Bool,
        TypeTag::PosInt,
        TypeTag::NegInt,
        TypeTag::List,
        TypeTag::Pair,
        TypeTag::ResultPair,
        TypeTag::Char,
        TypeTag::String,
        TypeTag::Error,
    ];

    pub fn id(self) -> u64 {
        self as u64
    }

    pub fn from_id(id: u64) -> Option<Self> {
        Self::ALL.iter().copied().find(|tag| tag.id() == id)
    }

    /// 标签编号的 bare numeral
    pub fn numeral(self) -> Term {
        match self {
            TypeTag::Void => bare::one(),
            TypeTag::Bool => bare::two(),
            TypeTag::PosInt => bare::three(),
            TypeTag::NegInt => bare::four(),
            TypeTag::List => bare::five(),
            TypeTag::Pair => bare::six(),
            TypeTag::ResultPair => bare::seven(),
            TypeTag::Char => bare::eight(),
            TypeTag::String => bare::nine(),
            TypeTag::Error => bare::ten(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Void => "Void",
            TypeTag::Bool => "Bool",
            TypeTag::PosInt => "PosInt",
            TypeTag::NegInt => "NegInt",
            TypeTag::List => "List",
            TypeTag::Pair => "Pair",
            TypeTag::ResultPair => "ResultPair",
            TypeTag::Char => "Char",
            TypeTag::String => "String",
            TypeTag::Error => "Error",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
