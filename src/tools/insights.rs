//! insights 工具：业务洞察聚合面板，绑定 insights-dashboard
//!
//! 单次后端调用 + 本地派生仅限状态行的 critical/warning 计数；
//! 洞察内容对本层不透明，完整的 severity 分组排序属于渲染侧。

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::gateway::BackendClient;
use crate::tools::registry::{Tool, ToolOutcome, WidgetBinding};
use crate::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::tools::{arg_str, format_amount};
use crate::widgets::insights_dashboard::InsightsProps;

pub struct InsightsTool {
    client: BackendClient,
}

impl InsightsTool {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for InsightsTool {
    fn name(&self) -> &str {
        "insights"
    }

    fn description(&self) -> &str {
        "Generate a comprehensive business insights dashboard aggregating all data — overdue \
         invoices, cash flow, financial trends, and reconciliation. Provides actionable \
         suggestions, warnings, tips, and visual charts to help the user make better decisions."
    }

    fn input_schema(&self) -> ToolSchema {
        ToolSchema::new(vec![FieldSpec::optional(
            "connectionId",
            FieldKind::String,
            json!("demo"),
            "Connection ID",
        )])
    }

    fn widget(&self) -> Option<WidgetBinding> {
        Some(WidgetBinding {
            name: "insights-dashboard",
            invoking: "Analyzing your business data...",
            invoked: "Insights ready",
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError> {
        let props: InsightsProps = self
            .client
            .post(
                "/insights",
                &json!({ "connection_id": arg_str(&args, "connectionId") }),
            )
            .await?;

        let (critical, warning) = props.severity_counts();
        let output = format!(
            "Business Insights: {} insights generated ({} critical, {} warnings). \
             Revenue: ${}, Profit margin: {}%, Overdue: ${} across {} invoices.",
            props.insights.len(),
            critical,
            warning,
            format_amount(props.summary.total_revenue),
            props.summary.avg_margin,
            format_amount(props.summary.total_overdue),
            props.summary.overdue_count
        );

        Ok(ToolOutcome::Widget {
            widget: "insights-dashboard",
            props: serde_json::to_value(&props)
                .map_err(|e| ToolError::InvalidResponse(e.to_string()))?,
            output,
        })
    }
}
