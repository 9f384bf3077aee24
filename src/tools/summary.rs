//! get-monthly-summary 工具：月度现金流摘要，绑定 cashflow-dashboard
//!
//! 七个工具中唯一的 GET 调用（connection_id 与 month 走查询参数）。

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::gateway::BackendClient;
use crate::tools::registry::{Tool, ToolOutcome, WidgetBinding};
use crate::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::tools::{arg_str, format_amount};
use crate::widgets::cashflow::MonthlySummaryResponse;

pub struct MonthlySummaryTool {
    client: BackendClient,
}

impl MonthlySummaryTool {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for MonthlySummaryTool {
    fn name(&self) -> &str {
        "get-monthly-summary"
    }

    fn description(&self) -> &str {
        "Get a cash flow summary for a specific month, including collected/outstanding \
         amounts, invoice count, and average days to pay."
    }

    fn input_schema(&self) -> ToolSchema {
        ToolSchema::new(vec![
            FieldSpec::optional("connectionId", FieldKind::String, json!("demo"), "Connection ID"),
            FieldSpec::optional(
                "month",
                FieldKind::String,
                json!("2026-02"),
                "Month in YYYY-MM format",
            ),
        ])
    }

    fn widget(&self) -> Option<WidgetBinding> {
        Some(WidgetBinding {
            name: "cashflow-dashboard",
            invoking: "Loading cash flow summary...",
            invoked: "Cash flow summary loaded",
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError> {
        let connection_id = arg_str(&args, "connectionId");
        let month = arg_str(&args, "month");

        let resp: MonthlySummaryResponse = self
            .client
            .get(
                "/summary/monthly",
                &[("connection_id", connection_id.as_str()), ("month", month.as_str())],
            )
            .await?;

        let props = resp.into_props();
        let output = format!(
            "Cash flow for {}: ${} collected, ${} outstanding, {} invoices",
            month,
            format_amount(props.collected),
            format_amount(props.outstanding),
            props.invoice_count
        );

        Ok(ToolOutcome::Widget {
            widget: "cashflow-dashboard",
            props: serde_json::to_value(&props)
                .map_err(|e| ToolError::InvalidResponse(e.to_string()))?,
            output,
        })
    }
}
