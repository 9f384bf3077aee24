//! cashflow-dashboard Widget：月度现金流摘要
//!
//! vs_last_month 增量块的四个字段各自独立可缺，缺哪个哪个按 0 规整，
//! 整块缺失则四个全为 0——props 里永远不出现「缺失」。

use serde::{Deserialize, Serialize};

/// 与上月对比的增量块
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct VsLastMonth {
    /// 回款额变化（%）
    pub collected_change: f64,
    /// 未回款额变化（%）
    pub outstanding_change: f64,
    /// 发票数变化（张）
    pub invoice_count_change: i64,
    /// 平均回款天数变化（天）
    pub avg_days_change: i64,
}

/// cashflow-dashboard 的 props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CashflowProps {
    pub collected: f64,
    pub outstanding: f64,
    pub invoice_count: i64,
    pub avg_days_to_pay: i64,
    pub month: String,
    pub vs_last_month: VsLastMonth,
}

/// GET /summary/monthly 的响应
#[derive(Debug, Clone, Deserialize, Default)]
pub struct MonthlySummaryResponse {
    #[serde(default)]
    pub month: String,
    #[serde(default)]
    pub collected: f64,
    #[serde(default)]
    pub outstanding: f64,
    #[serde(default)]
    pub invoice_count: i64,
    #[serde(default)]
    pub avg_days_to_pay: i64,
    pub vs_last_month: Option<RawDelta>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawDelta {
    pub collected_change: Option<f64>,
    pub outstanding_change: Option<f64>,
    pub invoice_count_change: Option<i64>,
    pub avg_days_change: Option<i64>,
}

impl MonthlySummaryResponse {
    pub fn into_props(self) -> CashflowProps {
        let delta = self.vs_last_month.unwrap_or_default();
        CashflowProps {
            collected: self.collected,
            outstanding: self.outstanding,
            invoice_count: self.invoice_count,
            avg_days_to_pay: self.avg_days_to_pay,
            month: self.month,
            vs_last_month: VsLastMonth {
                collected_change: delta.collected_change.unwrap_or(0.0),
                outstanding_change: delta.outstanding_change.unwrap_or(0.0),
                invoice_count_change: delta.invoice_count_change.unwrap_or(0),
                avg_days_change: delta.avg_days_change.unwrap_or(0),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_response_normalizes() {
        let resp: MonthlySummaryResponse = serde_json::from_value(json!({
            "month": "2026-02",
            "collected": 94200.0,
            "outstanding": 31500.0,
            "invoice_count": 47,
            "avg_days_to_pay": 16,
            "vs_last_month": {
                "collected_change": 12.5,
                "outstanding_change": -8.3,
                "invoice_count_change": 5,
                "avg_days_change": -2,
            },
        }))
        .unwrap();
        let props = resp.into_props();
        assert_eq!(props.vs_last_month.collected_change, 12.5);
        assert_eq!(props.vs_last_month.avg_days_change, -2);
        assert_eq!(props.invoice_count, 47);
    }

    #[test]
    fn test_missing_delta_block_defaults_to_zero() {
        let resp: MonthlySummaryResponse = serde_json::from_value(json!({
            "month": "2026-02",
            "collected": 94200.0,
        }))
        .unwrap();
        let props = resp.into_props();
        assert_eq!(props.vs_last_month.collected_change, 0.0);
        assert_eq!(props.vs_last_month.outstanding_change, 0.0);
        assert_eq!(props.vs_last_month.invoice_count_change, 0);
        assert_eq!(props.vs_last_month.avg_days_change, 0);
    }

    #[test]
    fn test_partial_delta_block_fills_per_field() {
        let resp: MonthlySummaryResponse = serde_json::from_value(json!({
            "month": "2026-02",
            "vs_last_month": { "collected_change": 3.1 },
        }))
        .unwrap();
        let props = resp.into_props();
        assert_eq!(props.vs_last_month.collected_change, 3.1);
        assert_eq!(props.vs_last_month.invoice_count_change, 0);
    }

    #[test]
    fn test_wire_shape_is_camel_case() {
        let rendered = serde_json::to_value(
            MonthlySummaryResponse::default().into_props(),
        )
        .unwrap();
        assert!(rendered.get("invoiceCount").is_some());
        assert!(rendered["vsLastMonth"].get("collectedChange").is_some());
    }
}
