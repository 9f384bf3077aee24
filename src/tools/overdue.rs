//! check-overdue-invoices 工具：拉取逾期发票并绑定 invoice-list Widget

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::gateway::BackendClient;
use crate::tools::registry::{Tool, ToolOutcome, WidgetBinding};
use crate::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::tools::{arg_i64, arg_str};
use crate::widgets::invoice_list::OverdueResponse;

pub struct CheckOverdueInvoicesTool {
    client: BackendClient,
}

impl CheckOverdueInvoicesTool {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for CheckOverdueInvoicesTool {
    fn name(&self) -> &str {
        "check-overdue-invoices"
    }

    fn description(&self) -> &str {
        "Fetch overdue invoices and display them in a visual list. \
         Use this when the user asks about unpaid or overdue invoices."
    }

    fn input_schema(&self) -> ToolSchema {
        ToolSchema::new(vec![
            FieldSpec::optional(
                "connectionId",
                FieldKind::String,
                json!("demo"),
                "Accounting connection ID",
            ),
            FieldSpec::optional(
                "minDaysOverdue",
                FieldKind::Integer,
                json!(0),
                "Minimum days overdue to filter by",
            ),
        ])
    }

    fn widget(&self) -> Option<WidgetBinding> {
        Some(WidgetBinding {
            name: "invoice-list",
            invoking: "Fetching overdue invoices...",
            invoked: "Overdue invoices loaded",
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError> {
        let connection_id = arg_str(&args, "connectionId");
        let min_days_overdue = arg_i64(&args, "minDaysOverdue");

        let resp: OverdueResponse = self
            .client
            .post(
                "/invoices/overdue",
                &json!({
                    "connection_id": connection_id,
                    "min_days_overdue": min_days_overdue,
                }),
            )
            .await?;

        let count = resp.count;
        let props = resp.into_props();
        let details: Vec<String> = props
            .invoices
            .iter()
            .map(|inv| {
                format!(
                    "- Invoice {}: {}, ${:.2}, {} days overdue (due {})",
                    inv.id, inv.customer_name, inv.amount, inv.days_overdue, inv.due_date
                )
            })
            .collect();
        let output = format!(
            "Found {} overdue invoice(s):\n{}",
            count,
            details.join("\n")
        );

        Ok(ToolOutcome::Widget {
            widget: "invoice-list",
            props: serde_json::to_value(&props)
                .map_err(|e| ToolError::InvalidResponse(e.to_string()))?,
            output,
        })
    }
}
