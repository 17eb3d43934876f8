//! API 类型定义
//!
//! 求值的输出类型。

use crate::host::HostValue;
use church_core::TypeTag;

/// 执行输出
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteOutput {
    /// 还原后的宿主值
    pub value: HostValue,
    /// 结果的类型标签；成功的结果对报告其载荷的标签
    pub type_tag: TypeTag,
}

impl ExecuteOutput {
    /// CLI 输出的 JSON；`show_type` 时附带类型名
    pub fn to_json(&self, show_type: bool) -> serde_json::Value {
        if show_type {
            serde_json::json!({
                "type": self.type_tag.name(),
                "value": self.value.to_json(),
            })
        } else {
            self.value.to_json()
        }
    }
}
