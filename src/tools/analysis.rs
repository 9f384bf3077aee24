//! financial-analysis 工具：分期财务分析，绑定 financial-charts
//!
//! periods 与 summary 由后端算好后原样透传（类型化 + 缺省值代入而已）。

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::gateway::BackendClient;
use crate::tools::registry::{Tool, ToolOutcome, WidgetBinding};
use crate::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::tools::{arg_i64, arg_str, format_amount};
use crate::widgets::financial_charts::FinancialChartsProps;

pub struct FinancialAnalysisTool {
    client: BackendClient,
}

impl FinancialAnalysisTool {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for FinancialAnalysisTool {
    fn name(&self) -> &str {
        "financial-analysis"
    }

    fn description(&self) -> &str {
        "Generate a comprehensive financial analysis with interactive charts showing revenue, \
         expenses, profit/loss, and sales data over time. Supports monthly and quarterly views \
         with full-year data."
    }

    fn input_schema(&self) -> ToolSchema {
        ToolSchema::new(vec![
            FieldSpec::optional("connectionId", FieldKind::String, json!("demo"), "Connection ID"),
            FieldSpec::optional(
                "timeframe",
                FieldKind::Enum(&["monthly", "quarterly"]),
                json!("monthly"),
                "Time period grouping",
            ),
            FieldSpec::optional("year", FieldKind::Integer, json!(2026), "Year to analyze"),
        ])
    }

    fn widget(&self) -> Option<WidgetBinding> {
        Some(WidgetBinding {
            name: "financial-charts",
            invoking: "Analyzing financial data...",
            invoked: "Financial analysis ready",
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError> {
        let year = arg_i64(&args, "year");
        let timeframe = arg_str(&args, "timeframe");

        let props: FinancialChartsProps = self
            .client
            .post(
                "/analysis/financial",
                &json!({
                    "connection_id": arg_str(&args, "connectionId"),
                    "timeframe": timeframe,
                    "year": year,
                }),
            )
            .await?;

        let output = format!(
            "Financial Analysis {} ({}): ${} revenue, ${} profit, {}% margin, {}% YoY growth",
            year,
            timeframe,
            format_amount(props.summary.total_revenue),
            format_amount(props.summary.total_profit),
            props.summary.avg_profit_margin,
            props.summary.revenue_growth
        );

        Ok(ToolOutcome::Widget {
            widget: "financial-charts",
            props: serde_json::to_value(&props)
                .map_err(|e| ToolError::InvalidResponse(e.to_string()))?,
            output,
        })
    }
}
