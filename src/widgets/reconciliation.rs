//! reconciliation-dashboard Widget：对账结果三序列
//!
//! 后端的三个序列里每条记录都嵌套 invoice/transaction 子对象外加自由文本 reason，
//! 这里摊平成三个互相独立的扁平序列。名称回落：匹配记录取发票客户名，空则取
//! 交易付款人名；未匹配交易的 description 取付款人名，空则取 reason。
//! 顺序照收照转，不排序。

use serde::{Deserialize, Serialize};

/// 匹配对（摊平后）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MatchedItem {
    pub invoice_id: String,
    pub transaction_id: String,
    pub invoice_amount: f64,
    pub transaction_amount: f64,
    pub customer_name: String,
    /// 后端给出的匹配置信度 [0,1]，原样保留
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UnmatchedTransaction {
    pub id: String,
    pub amount: f64,
    pub date: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct UnmatchedInvoice {
    pub id: String,
    pub amount: f64,
    pub customer_name: String,
    pub due_date: String,
}

/// reconciliation-dashboard 的 props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ReconciliationProps {
    pub matched: Vec<MatchedItem>,
    #[serde(rename = "unmatchedTransactions")]
    pub unmatched_transactions: Vec<UnmatchedTransaction>,
    #[serde(rename = "unmatchedInvoices")]
    pub unmatched_invoices: Vec<UnmatchedInvoice>,
}

/// POST /payments/reconcile 的响应（嵌套原始形态）
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ReconcileResponse {
    #[serde(default)]
    pub matched: Vec<RawMatch>,
    #[serde(default)]
    pub unmatched_transactions: Vec<RawUnmatchedTransaction>,
    #[serde(default)]
    pub unmatched_invoices: Vec<RawUnmatchedInvoice>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawMatch {
    pub invoice: Option<RawInvoice>,
    pub transaction: Option<RawTransaction>,
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUnmatchedTransaction {
    pub transaction: Option<RawTransaction>,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawUnmatchedInvoice {
    pub invoice: Option<RawInvoice>,
    #[serde(default)]
    pub reason: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawInvoice {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub due_date: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawTransaction {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub payer_name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub date: String,
}

fn first_non_empty(a: String, b: String) -> String {
    if a.is_empty() {
        b
    } else {
        a
    }
}

impl ReconcileResponse {
    /// 摊平为三个独立序列的 props
    pub fn into_props(self) -> ReconciliationProps {
        let matched = self
            .matched
            .into_iter()
            .map(|m| {
                let invoice = m.invoice.unwrap_or_default();
                let transaction = m.transaction.unwrap_or_default();
                MatchedItem {
                    invoice_id: invoice.id,
                    transaction_id: transaction.id,
                    invoice_amount: invoice.amount,
                    transaction_amount: transaction.amount,
                    customer_name: first_non_empty(invoice.customer_name, transaction.payer_name),
                    confidence: m.confidence,
                }
            })
            .collect();

        let unmatched_transactions = self
            .unmatched_transactions
            .into_iter()
            .map(|u| {
                let transaction = u.transaction.unwrap_or_default();
                UnmatchedTransaction {
                    id: transaction.id,
                    amount: transaction.amount,
                    date: transaction.date,
                    description: first_non_empty(transaction.payer_name, u.reason),
                }
            })
            .collect();

        let unmatched_invoices = self
            .unmatched_invoices
            .into_iter()
            .map(|u| {
                let invoice = u.invoice.unwrap_or_default();
                UnmatchedInvoice {
                    id: invoice.id,
                    amount: invoice.amount,
                    customer_name: invoice.customer_name,
                    due_date: invoice.due_date,
                }
            })
            .collect();

        ReconciliationProps {
            matched,
            unmatched_transactions,
            unmatched_invoices,
        }
    }
}
