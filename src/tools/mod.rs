//! 工具箱：七个面向宿主 Agent 的 AR/AP 工具与执行器
//!
//! 每个工具：声明式入参 Schema（统一由 ToolSchema::validate 校验）→ 恰好一次
//! 后端网关调用 → 规整为 Widget props + 状态行（或纯结构化对象）。读类工具
//! 可安全重复调用；confirm-send-email 是唯一带外部副作用的工具。

pub mod analysis;
pub mod email;
pub mod executor;
pub mod insights;
pub mod overdue;
pub mod reconcile;
pub mod registry;
pub mod schema;
pub mod summary;

pub use analysis::FinancialAnalysisTool;
pub use email::{recommended_tone, ConfirmSendEmailTool, SendFollowupEmailTool};
pub use executor::ToolExecutor;
pub use insights::InsightsTool;
pub use overdue::CheckOverdueInvoicesTool;
pub use reconcile::ReconcilePaymentsTool;
pub use registry::{Tool, ToolOutcome, ToolRegistry, WidgetBinding};
pub use schema::{tool_call_schema_json, FieldKind, FieldSpec, ToolSchema};
pub use summary::MonthlySummaryTool;

use serde_json::Value;

use crate::gateway::BackendClient;

/// 注册全部七个工具
pub fn build_registry(client: &BackendClient) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(CheckOverdueInvoicesTool::new(client.clone()));
    registry.register(SendFollowupEmailTool::new(client.clone()));
    registry.register(ConfirmSendEmailTool::new(client.clone()));
    registry.register(ReconcilePaymentsTool::new(client.clone()));
    registry.register(MonthlySummaryTool::new(client.clone()));
    registry.register(FinancialAnalysisTool::new(client.clone()));
    registry.register(InsightsTool::new(client.clone()));
    registry
}

/// 取字符串入参（args 已过校验，字段必在）
pub(crate) fn arg_str(args: &Value, name: &str) -> String {
    args.get(name)
        .and_then(|v| v.as_str())
        .unwrap_or_default()
        .to_string()
}

/// 取整数入参（校验放行的整值浮点也接住）
pub(crate) fn arg_i64(args: &Value, name: &str) -> i64 {
    args.get(name)
        .and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64)))
        .unwrap_or(0)
}

/// 金额千分位格式化（状态行用）：94200.0 → "94,200"，1234.5 → "1,234.50"
pub(crate) fn format_amount(value: f64) -> String {
    let negative = value < 0.0;
    let value = value.abs();
    let whole = value.trunc() as u64;
    let cents = ((value - value.trunc()) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&grouped);
    if cents > 0 {
        out.push_str(&format!(".{:02}", cents));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(94200.0), "94,200");
        assert_eq!(format_amount(1234.5), "1,234.50");
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(-8750.0), "-8,750");
        assert_eq!(format_amount(1000000.0), "1,000,000");
    }
}
