//! invoice-list Widget：逾期发票列表
//!
//! 后端发票记录带有 currency、status 等列表不关心的字段，反序列化时直接丢弃；
//! days_overdue 为后端算好的派生值（可为负表示未到期），原样保留。

use serde::{Deserialize, Serialize};

/// 单张发票（规整后的扁平记录）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Invoice {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_email: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub days_overdue: i64,
}

/// invoice-list 的 props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InvoiceListProps {
    pub invoices: Vec<Invoice>,
}

/// POST /invoices/overdue 的响应
#[derive(Debug, Clone, Deserialize, Default)]
pub struct OverdueResponse {
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(default)]
    pub count: i64,
}

impl OverdueResponse {
    pub fn into_props(self) -> InvoiceListProps {
        InvoiceListProps {
            invoices: self.invoices,
        }
    }
}
