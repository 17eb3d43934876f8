//! CLI 格式化输出
//!
//! 结果以 pretty JSON 写到 stdout，错误写到 stderr。

use church_api::{ChurchError, ErrorDetails, ExecuteOutput};

/// 打印结果
pub fn print_output(output: &ExecuteOutput, show_type: bool) -> Result<(), ChurchError> {
    let rendered = serde_json::to_string_pretty(&output.to_json(show_type))?;
    println!("{rendered}");
    Ok(())
}

/// 打印错误及其分类
pub fn print_error(e: &ChurchError) {
    eprintln!("❌ {}", e);

    let report = e.to_report();
    eprintln!("   kind: {} ({})", report.error_kind, report.phase);
    match report.details {
        Some(ErrorDetails::Limit { limit }) => eprintln!("   limit: {limit}"),
        Some(ErrorDetails::Arity { expected }) => eprintln!("   expected arguments: {expected}"),
        None => {}
    }
}
