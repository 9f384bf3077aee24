//! Widget 属性契约与响应规整
//!
//! 每个 Widget 一个文件：props 结构体（渲染面可依赖的全部字段）+ 从后端响应
//! 规整出 props 的逻辑。规整规则：缺失字段一律代入类型对应的零值（0 / 空串 /
//! 空序列），绝不把「缺失」传进 props；嵌套记录摊平成同级字段；后端算好的
//! 派生字段（days_overdue、profit、revenue_growth 等）原样保留，不在本层重算。
//! 序列顺序照收照转，排序与筛选是渲染侧的事。

pub mod cashflow;
pub mod email_preview;
pub mod financial_charts;
pub mod insights_dashboard;
pub mod invoice_list;
pub mod reconciliation;

pub use cashflow::CashflowProps;
pub use email_preview::{DraftSession, DraftState, EmailPreviewProps};
pub use financial_charts::FinancialChartsProps;
pub use insights_dashboard::InsightsProps;
pub use invoice_list::InvoiceListProps;
pub use reconciliation::ReconciliationProps;

use serde_json::Value;

/// Widget 发回工具层的调用请求（消息传递：除这对请求/响应外无共享可变状态）
#[derive(Debug, Clone, PartialEq)]
pub struct ToolRequest {
    pub tool: String,
    pub args: Value,
}
