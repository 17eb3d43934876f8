//! 测试辅助工具
//!
//! 以默认配置按名调用运算，并提供宿主值的简写构造

#![allow(dead_code)]

use church_api::{run_named, ChurchError, ExecuteOutput, HostValue, RunConfig};

/// 按名运行，返回完整输出
pub fn run_output(op: &str, args: &[HostValue]) -> Result<ExecuteOutput, ChurchError> {
    run_named(op, args, &RunConfig::default())
}

/// 按名运行，只返回值
pub fn run_op(op: &str, args: &[HostValue]) -> Result<HostValue, ChurchError> {
    run_output(op, args).map(|out| out.value)
}

pub fn int(n: i64) -> HostValue {
    HostValue::Int(n)
}

pub fn text(s: &str) -> HostValue {
    HostValue::Str(s.to_string())
}

pub fn ints(items: &[i64]) -> HostValue {
    HostValue::List(items.iter().copied().map(HostValue::Int).collect())
}

/// 0 同时以 +0 和 −0 出现
pub fn zero_variants(n: i64) -> Vec<HostValue> {
    if n == 0 {
        vec![HostValue::Int(0), HostValue::NegZero]
    } else {
        vec![HostValue::Int(n)]
    }
}
