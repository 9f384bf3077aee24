//! email-preview Widget：邮件草稿预览与「起草 → 确认发送」两阶段协议
//!
//! 工具侧：send-followup-email 产出草稿 props；后端 2xx 但 {status:"error"} 时
//! 按软错误处理——props 全部置零值（金额 0、主题正文空串），错误信息进状态行，
//! Widget 始终有确定的可渲染状态。
//! Widget 侧：DraftSession 状态机 Drafted ⇄ Editing → Sending → Sent。编辑把
//! 主题/正文拷入可变字段，退出编辑不丢弃改动；reset 恢复到起草原值（不是清空）；
//! 发送携带当前（可能已编辑的）收件人/主题/正文；Sending 期间拒绝再次触发；
//! Sent 为终态，新草稿需要从 Widget 外重新发起工具调用。

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::widgets::ToolRequest;

/// email-preview 的 props（起草原值，Widget 本地编辑不回写这里）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct EmailPreviewProps {
    pub invoice_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub amount: f64,
    pub subject: String,
    pub body: String,
    pub tone: String,
    pub connection_id: String,
}

/// POST /email/send-followup 的响应：status 为 "draft" 或 "error"
#[derive(Debug, Clone, Deserialize, Default)]
pub struct FollowupResponse {
    #[serde(default)]
    pub status: String,
    pub message: Option<String>,
    pub invoice: Option<DraftInvoice>,
    pub email: Option<DraftEmail>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DraftInvoice {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub amount: f64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DraftEmail {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub body: String,
}

impl FollowupResponse {
    /// 是否为后端业务错误（2xx + {status:"error"}）
    pub fn is_error(&self) -> bool {
        self.status == "error"
    }

    /// 规整为 props 与状态行
    ///
    /// 业务错误 → 零值 props + "Error: ..." 状态行；正常 → 嵌套的 invoice/email
    /// 摊平进 props，发票 id 缺失时回落到入参的 invoice_id。
    pub fn into_props(
        self,
        invoice_id: &str,
        tone: &str,
        connection_id: &str,
    ) -> (EmailPreviewProps, String) {
        if self.is_error() {
            let message = self.message.unwrap_or_default();
            let props = EmailPreviewProps {
                invoice_id: invoice_id.to_string(),
                tone: tone.to_string(),
                connection_id: connection_id.to_string(),
                ..Default::default()
            };
            return (props, format!("Error: {}", message));
        }

        let invoice = self.invoice.unwrap_or_default();
        let email = self.email.unwrap_or_default();
        let id = if invoice.id.is_empty() {
            invoice_id.to_string()
        } else {
            invoice.id.clone()
        };

        let output = format!(
            "Drafted {} email for invoice {} ({}, ${:.2}). \
             The user can review, edit, and send from the preview widget.",
            tone, id, invoice.customer_name, invoice.amount
        );
        let props = EmailPreviewProps {
            invoice_id: id,
            customer_name: invoice.customer_name,
            customer_email: invoice.customer_email,
            amount: invoice.amount,
            subject: email.subject,
            body: email.body,
            tone: tone.to_string(),
            connection_id: connection_id.to_string(),
        };
        (props, output)
    }
}

/// 草稿会话状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftState {
    /// 草稿就绪，可编辑或发送
    Drafted,
    /// 编辑模式：主题/正文在本地可变字段中
    Editing,
    /// confirm-send-email 调用在途，拒绝重复触发
    Sending,
    /// 终态：不再提供任何转移
    Sent,
}

/// 草稿会话：email-preview Widget 的本地交互状态机
///
/// 一个 Widget 实例一个会话；两个发票行各自的会话互不相干，可同时在途。
#[derive(Debug, Clone)]
pub struct DraftSession {
    props: EmailPreviewProps,
    subject: String,
    body: String,
    state: DraftState,
    /// Sending 失败后回落到的状态（Drafted 或 Editing）
    resume: DraftState,
}

impl DraftSession {
    pub fn new(props: EmailPreviewProps) -> Self {
        let subject = props.subject.clone();
        let body = props.body.clone();
        Self {
            props,
            subject,
            body,
            state: DraftState::Drafted,
            resume: DraftState::Drafted,
        }
    }

    pub fn state(&self) -> DraftState {
        self.state
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// 进入编辑模式（仅 Drafted 可进）
    pub fn begin_edit(&mut self) {
        if self.state == DraftState::Drafted {
            self.state = DraftState::Editing;
        }
    }

    /// 退出编辑模式；已做的改动保留
    pub fn finish_edit(&mut self) {
        if self.state == DraftState::Editing {
            self.state = DraftState::Drafted;
        }
    }

    pub fn set_subject(&mut self, subject: impl Into<String>) {
        if self.state == DraftState::Editing {
            self.subject = subject.into();
        }
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        if self.state == DraftState::Editing {
            self.body = body.into();
        }
    }

    /// 恢复主题/正文到起草原值（不是清空）
    pub fn reset(&mut self) {
        if self.state == DraftState::Editing {
            self.subject = self.props.subject.clone();
            self.body = self.props.body.clone();
        }
    }

    /// 触发发送：返回 confirm-send-email 的调用请求，携带当前（可能已编辑的）值
    ///
    /// 仅 Drafted / Editing 可触发；Sending（在途）与 Sent（终态）返回 None。
    pub fn send_request(&mut self) -> Option<ToolRequest> {
        match self.state {
            DraftState::Drafted | DraftState::Editing => {
                self.resume = self.state;
                self.state = DraftState::Sending;
                Some(ToolRequest {
                    tool: "confirm-send-email".to_string(),
                    args: json!({
                        "connectionId": self.props.connection_id,
                        "invoiceId": self.props.invoice_id,
                        "to": self.props.customer_email,
                        "subject": self.subject,
                        "body": self.body,
                    }),
                })
            }
            DraftState::Sending | DraftState::Sent => None,
        }
    }

    /// 发送成功：进入终态
    pub fn mark_sent(&mut self) {
        if self.state == DraftState::Sending {
            self.state = DraftState::Sent;
        }
    }

    /// 发送失败：回到触发前的状态，发送动作保持可重试
    pub fn mark_send_failed(&mut self) {
        if self.state == DraftState::Sending {
            self.state = self.resume;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drafted_props() -> EmailPreviewProps {
        EmailPreviewProps {
            invoice_id: "inv_003".to_string(),
            customer_name: "StartupXYZ".to_string(),
            customer_email: "finance@startupxyz.com".to_string(),
            amount: 3200.0,
            subject: "Payment Required: Invoice inv_003 — $3200.00 Overdue".to_string(),
            body: "Dear StartupXYZ,\n\nThis is a follow-up...".to_string(),
            tone: "firm".to_string(),
            connection_id: "demo".to_string(),
        }
    }

    #[test]
    fn test_send_without_edits_carries_drafted_values() {
        let props = drafted_props();
        let mut session = DraftSession::new(props.clone());

        let req = session.send_request().unwrap();
        assert_eq!(req.tool, "confirm-send-email");
        assert_eq!(req.args["subject"], props.subject.as_str());
        assert_eq!(req.args["body"], props.body.as_str());
        assert_eq!(req.args["to"], "finance@startupxyz.com");
        assert_eq!(session.state(), DraftState::Sending);
    }

    #[test]
    fn test_edit_then_send_carries_edited_values() {
        let mut session = DraftSession::new(drafted_props());
        session.begin_edit();
        session.set_subject("Final Reminder");
        session.finish_edit();

        let req = session.send_request().unwrap();
        assert_eq!(req.args["subject"], "Final Reminder");
        // 正文未动，保持起草原值
        assert_eq!(req.args["body"], "Dear StartupXYZ,\n\nThis is a follow-up...");
    }

    #[test]
    fn test_exit_edit_mode_keeps_edits() {
        let mut session = DraftSession::new(drafted_props());
        session.begin_edit();
        session.set_body("Short version.");
        session.finish_edit();
        assert_eq!(session.body(), "Short version.");
    }

    #[test]
    fn test_reset_restores_drafted_values_not_empty() {
        let props = drafted_props();
        let mut session = DraftSession::new(props.clone());
        session.begin_edit();
        session.set_subject("oops");
        session.set_body("oops body");
        session.reset();
        assert_eq!(session.subject(), props.subject);
        assert_eq!(session.body(), props.body);
    }

    #[test]
    fn test_no_duplicate_send_while_in_flight() {
        let mut session = DraftSession::new(drafted_props());
        assert!(session.send_request().is_some());
        assert!(session.send_request().is_none());
    }

    #[test]
    fn test_sent_is_terminal() {
        let mut session = DraftSession::new(drafted_props());
        session.send_request().unwrap();
        session.mark_sent();
        assert_eq!(session.state(), DraftState::Sent);
        assert!(session.send_request().is_none());
        session.begin_edit();
        assert_eq!(session.state(), DraftState::Sent);
    }

    #[test]
    fn test_send_failure_returns_to_prior_state() {
        let mut session = DraftSession::new(drafted_props());
        session.begin_edit();
        session.send_request().unwrap();
        session.mark_send_failed();
        assert_eq!(session.state(), DraftState::Editing);
        assert!(session.send_request().is_some());
    }

    #[test]
    fn test_backend_domain_error_yields_defined_empty_props() {
        let resp: FollowupResponse = serde_json::from_value(serde_json::json!({
            "status": "error",
            "message": "Invoice inv_999 not found",
        }))
        .unwrap();

        let (props, output) = resp.into_props("inv_999", "friendly", "demo");
        assert_eq!(props.amount, 0.0);
        assert_eq!(props.subject, "");
        assert_eq!(props.body, "");
        assert_eq!(props.invoice_id, "inv_999");
        assert!(output.contains("not found"));
    }

    #[test]
    fn test_props_wire_shape_is_camel_case() {
        let rendered = serde_json::to_value(drafted_props()).unwrap();
        assert!(rendered.get("invoiceId").is_some());
        assert!(rendered.get("customerEmail").is_some());
        assert!(rendered.get("invoice_id").is_none());
    }
}
