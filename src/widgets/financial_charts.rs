//! financial-charts Widget：分期财务指标与年度汇总
//!
//! profit、revenue_growth、avg_profit_margin 都是后端算好的，本层只做类型化
//! 与缺省值代入，不重算（revenue − expenses 与 profit 的关系由后端保证）。

use serde::{Deserialize, Serialize};

/// 单个期间（月或季度）的财务指标
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PeriodMetric {
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub revenue: f64,
    #[serde(default)]
    pub expenses: f64,
    #[serde(default)]
    pub profit: f64,
    #[serde(default)]
    pub sales: i64,
    #[serde(default)]
    pub cogs: f64,
    #[serde(default)]
    pub operating_expenses: f64,
}

/// 年度汇总
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PeriodSummary {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub total_sales: i64,
    #[serde(default)]
    pub avg_profit_margin: f64,
    #[serde(default)]
    pub best_month: String,
    #[serde(default)]
    pub best_month_revenue: f64,
    #[serde(default)]
    pub worst_month: String,
    #[serde(default)]
    pub worst_month_revenue: f64,
    #[serde(default)]
    pub revenue_growth: f64,
}

/// financial-charts 的 props；POST /analysis/financial 的响应与之同形，
/// 反序列化即规整
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct FinancialChartsProps {
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub timeframe: String,
    #[serde(default)]
    pub periods: Vec<PeriodMetric>,
    #[serde(default)]
    pub summary: PeriodSummary,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_backend_derived_fields_kept_verbatim() {
        // profit 故意与 revenue - expenses 不一致：本层不重算，照收
        let props: FinancialChartsProps = serde_json::from_value(json!({
            "year": 2026,
            "timeframe": "monthly",
            "periods": [{
                "period": "Jan",
                "revenue": 100.0,
                "expenses": 40.0,
                "profit": 55.0,
                "sales": 12,
                "cogs": 25.0,
                "operating_expenses": 15.0,
            }],
            "summary": { "total_revenue": 100.0, "revenue_growth": 38.9 },
        }))
        .unwrap();
        assert_eq!(props.periods[0].profit, 55.0);
        assert_eq!(props.summary.revenue_growth, 38.9);
    }

    #[test]
    fn test_missing_summary_fields_default() {
        let props: FinancialChartsProps =
            serde_json::from_value(json!({ "year": 2026, "timeframe": "quarterly" })).unwrap();
        assert_eq!(props.summary.best_month, "");
        assert_eq!(props.summary.total_sales, 0);
        assert!(props.periods.is_empty());
    }
}
