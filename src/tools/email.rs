//! 邮件跟进工具对：send-followup-email（起草）与 confirm-send-email（确认发送）
//!
//! 两阶段协议的工具侧。起草工具绑定 email-preview Widget，后端业务错误按
//! 软错误吸收（见 widgets::email_preview）；确认工具无 Widget 跟进，是全系统
//! 唯一带外部副作用的工具——只有用户在 Widget 中显式触发发送时才会被调用，
//! 起草绝不自动发送。

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::gateway::BackendClient;
use crate::tools::registry::{Tool, ToolOutcome, WidgetBinding};
use crate::tools::schema::{FieldKind, FieldSpec, ToolSchema};
use crate::tools::arg_str;
use crate::widgets::email_preview::FollowupResponse;

/// 支持的邮件语气
pub const TONES: &[&str] = &["friendly", "firm", "final-notice"];

/// 按逾期天数推荐语气（建议值，调用方传入的 tone 优先）
pub fn recommended_tone(days_overdue: i64) -> &'static str {
    if days_overdue > 30 {
        "final-notice"
    } else if days_overdue > 14 {
        "firm"
    } else {
        "friendly"
    }
}

pub struct SendFollowupEmailTool {
    client: BackendClient,
}

impl SendFollowupEmailTool {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for SendFollowupEmailTool {
    fn name(&self) -> &str {
        "send-followup-email"
    }

    fn description(&self) -> &str {
        "Draft a payment reminder email for a specific invoice and show a preview widget \
         where the user can edit and confirm before sending. \
         Supports friendly, firm, and final-notice tones."
    }

    fn input_schema(&self) -> ToolSchema {
        ToolSchema::new(vec![
            FieldSpec::optional("connectionId", FieldKind::String, json!("demo"), "Connection ID"),
            FieldSpec::required("invoiceId", FieldKind::String, "The invoice ID to follow up on"),
            FieldSpec::optional(
                "tone",
                FieldKind::Enum(TONES),
                json!("friendly"),
                "Email tone",
            ),
        ])
    }

    fn widget(&self) -> Option<WidgetBinding> {
        Some(WidgetBinding {
            name: "email-preview",
            invoking: "Drafting email...",
            invoked: "Email draft ready — review and edit before sending",
        })
    }

    async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError> {
        let connection_id = arg_str(&args, "connectionId");
        let invoice_id = arg_str(&args, "invoiceId");
        let tone = arg_str(&args, "tone");

        let resp: FollowupResponse = self
            .client
            .post(
                "/email/send-followup",
                &json!({
                    "connection_id": connection_id,
                    "invoice_id": invoice_id,
                    "tone": tone,
                }),
            )
            .await?;

        let (props, output) = resp.into_props(&invoice_id, &tone, &connection_id);
        Ok(ToolOutcome::Widget {
            widget: "email-preview",
            props: serde_json::to_value(&props)
                .map_err(|e| ToolError::InvalidResponse(e.to_string()))?,
            output,
        })
    }
}

/// POST /email/confirm 的响应
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfirmResponse {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
    pub invoice_id: Option<String>,
}

pub struct ConfirmSendEmailTool {
    client: BackendClient,
}

impl ConfirmSendEmailTool {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for ConfirmSendEmailTool {
    fn name(&self) -> &str {
        "confirm-send-email"
    }

    fn description(&self) -> &str {
        "Send a previously drafted (and possibly edited) follow-up email. \
         This is called from the email preview widget after the user reviews the draft."
    }

    fn input_schema(&self) -> ToolSchema {
        ToolSchema::new(vec![
            FieldSpec::optional("connectionId", FieldKind::String, json!("demo"), "Connection ID"),
            FieldSpec::required("invoiceId", FieldKind::String, "Invoice ID"),
            FieldSpec::required("to", FieldKind::String, "Recipient email address"),
            FieldSpec::required("subject", FieldKind::String, "Email subject"),
            FieldSpec::required("body", FieldKind::String, "Email body"),
        ])
    }

    async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError> {
        let resp: ConfirmResponse = self
            .client
            .post(
                "/email/confirm",
                &json!({
                    "connection_id": arg_str(&args, "connectionId"),
                    "invoice_id": arg_str(&args, "invoiceId"),
                    "to": arg_str(&args, "to"),
                    "subject": arg_str(&args, "subject"),
                    "body": arg_str(&args, "body"),
                }),
            )
            .await?;

        // 无 Widget 跟进：status/message 原样透传，成败由调用方（Widget 会话）判断
        Ok(ToolOutcome::Object(json!({
            "status": resp.status,
            "message": resp.message,
            "invoice_id": resp.invoice_id,
        })))
    }
}
