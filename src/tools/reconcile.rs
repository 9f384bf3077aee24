//! reconcile-payments 工具：回款与发票的模糊匹配结果，绑定 reconciliation-dashboard
//!
//! 匹配算法在后端；本层只把嵌套的三序列摊平（见 widgets::reconciliation）。

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::gateway::BackendClient;
use crate::tools::registry::{Tool, ToolOutcome, WidgetBinding};
use crate::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::tools::arg_str;
use crate::widgets::reconciliation::ReconcileResponse;

pub struct ReconcilePaymentsTool {
    client: BackendClient,
}

impl ReconcilePaymentsTool {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for ReconcilePaymentsTool {
    fn name(&self) -> &str {
        "reconcile-payments"
    }

    fn description(&self) -> &str {
        "Fuzzy match recent payments against outstanding invoices to identify matched and \
         unmatched transactions. Shows an interactive reconciliation dashboard."
    }

    fn input_schema(&self) -> ToolSchema {
        ToolSchema::new(vec![
            FieldSpec::optional(
                "accountingConnectionId",
                FieldKind::String,
                json!("demo"),
                "Accounting connection ID",
            ),
            FieldSpec::optional(
                "paymentConnectionId",
                FieldKind::String,
                json!("demo"),
                "Payment connection ID",
            ),
        ])
    }

    fn widget(&self) -> Option<WidgetBinding> {
        Some(WidgetBinding {
            name: "reconciliation-dashboard",
            invoking: "Reconciling payments...",
            invoked: "Reconciliation complete",
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError> {
        let resp: ReconcileResponse = self
            .client
            .post(
                "/payments/reconcile",
                &json!({
                    "accounting_connection_id": arg_str(&args, "accountingConnectionId"),
                    "payment_connection_id": arg_str(&args, "paymentConnectionId"),
                }),
            )
            .await?;

        let props = resp.into_props();
        let output = format!(
            "Reconciliation complete: {} matched, {} unmatched transactions, {} unmatched invoices",
            props.matched.len(),
            props.unmatched_transactions.len(),
            props.unmatched_invoices.len()
        );

        Ok(ToolOutcome::Widget {
            widget: "reconciliation-dashboard",
            props: serde_json::to_value(&props)
                .map_err(|e| ToolError::InvalidResponse(e.to_string()))?,
            output,
        })
    }
}
