//! Typed 层 - 带类型标签的值
//!
//! 在 bare 层之上给每个值附加类型标签。运算先检查标签，
//! 不符时返回 typed TypeError 值；所有运算都是全函数。

pub mod ops;
pub mod tag;
pub mod value;

pub use ops::{
    add, and, append, concat, elt, equalp, head, if_, is_empty, is_zero, len, mk_pair, mult, neg,
    on_result, or, prepend, strcat, strchr, strlen, sub, tail,
};
pub use tag::TypeTag;
pub use value::{
    is_bool, is_char, is_error, is_int, is_list, is_neg_int, is_pair, is_pos_int,
    is_result_pair, is_string, is_void, type_of, Value,
};
