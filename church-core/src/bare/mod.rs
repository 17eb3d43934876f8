//! Bare 层 - 无类型的闭包编码
//!
//! 布尔、Peano 数、序对、cons 列表、不动点组合子和结果对。
//! 每个运算本身都是一个 `Term`，只通过闭包应用来计算，
//! 不使用宿主语言的条件、循环或可变状态。
//! `host` 模块是例外：它是宿主值进出闭包编码的边界。
//!
//! 畸形输入（例如把非布尔值当作布尔值）的行为未定义；
//! 类型检查由 typed 层负责。

// ==================== 基础类型 ====================

pub mod term;
pub use term::Term;

// ==================== 组合子 ====================

pub mod boolean;
pub mod fix;
pub mod host;
pub mod list;
pub mod numeral;
pub mod pair;
pub mod result;

pub use boolean::{and, fls, if_, not, or, tru, void, xor};
pub use fix::{fix, y};
pub use list::{append, concat, elt, len, next, nth_cons, prepend};
pub use numeral::{
    add, eight, equalp, five, four, geq, gt, is_zero, leq, lt, mult, nine, one, pred, seven,
    six, sub, succ, ten, three, two, zero,
};
pub use pair::{cons, cons_head, cons_tail, is_nil, nil, pair, pair_head, pair_tail};
pub use result::{
    index_error_id, no_error_id, on_result, result_errval, result_pair, result_val,
    result_was_err, type_error_id,
};
