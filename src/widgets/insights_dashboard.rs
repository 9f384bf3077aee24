//! insights-dashboard Widget：洞察聚合面板
//!
//! 洞察由后端生成，对编排层不透明——除按 severity 数数外不做任何解读。
//! 编排侧只为状态行统计 critical / warning 条数；完整的 severity 分组排序
//! 属于渲染侧。

use serde::{Deserialize, Serialize};

/// 单条洞察（type: metric / warning / trend / tip；severity: success / info / warning / critical）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Insight {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub severity: String,
    #[serde(default)]
    pub title: String,
    /// 后端预格式化的展示值（如 "87.5%"），原样保留
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub suggestion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OverdueCustomer {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub amount: f64,
    #[serde(default)]
    pub days_overdue: i64,
    #[serde(default)]
    pub invoice_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SummaryMetrics {
    #[serde(default)]
    pub total_revenue: f64,
    #[serde(default)]
    pub total_profit: f64,
    #[serde(default)]
    pub total_expenses: f64,
    #[serde(default)]
    pub avg_margin: f64,
    #[serde(default)]
    pub total_overdue: f64,
    #[serde(default)]
    pub overdue_count: i64,
    #[serde(default)]
    pub avg_days_overdue: i64,
    #[serde(default)]
    pub collection_rate: f64,
    #[serde(default)]
    pub revenue_growth: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartData {
    #[serde(default)]
    pub months: Vec<String>,
    #[serde(default)]
    pub revenue: Vec<f64>,
    #[serde(default)]
    pub profit: Vec<f64>,
    #[serde(default)]
    pub expenses: Vec<f64>,
    #[serde(default)]
    pub expense_ratios: Vec<f64>,
}

/// insights-dashboard 的 props；POST /insights 的响应与之同形
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct InsightsProps {
    #[serde(default)]
    pub summary: SummaryMetrics,
    #[serde(default)]
    pub insights: Vec<Insight>,
    #[serde(default)]
    pub top_overdue_customers: Vec<OverdueCustomer>,
    #[serde(default)]
    pub charts: ChartData,
}

impl InsightsProps {
    /// (critical, warning) 条数——仅用于工具状态行
    pub fn severity_counts(&self) -> (usize, usize) {
        let critical = self
            .insights
            .iter()
            .filter(|i| i.severity == "critical")
            .count();
        let warning = self
            .insights
            .iter()
            .filter(|i| i.severity == "warning")
            .count();
        (critical, warning)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_severity_counts() {
        let props: InsightsProps = serde_json::from_value(json!({
            "insights": [
                { "type": "warning", "severity": "critical", "title": "Overdue pileup" },
                { "type": "metric", "severity": "info", "title": "Collection rate" },
                { "type": "trend", "severity": "warning", "title": "Expense creep" },
                { "type": "warning", "severity": "warning", "title": "Slow payer" },
            ],
        }))
        .unwrap();
        assert_eq!(props.severity_counts(), (1, 2));
    }

    #[test]
    fn test_insight_order_untouched() {
        let props: InsightsProps = serde_json::from_value(json!({
            "insights": [
                { "type": "tip", "severity": "info", "title": "b" },
                { "type": "warning", "severity": "critical", "title": "a" },
            ],
        }))
        .unwrap();
        assert_eq!(props.insights[0].title, "b");
        assert_eq!(props.insights[1].title, "a");
    }

    #[test]
    fn test_empty_response_yields_defined_props() {
        let props: InsightsProps = serde_json::from_value(json!({})).unwrap();
        assert_eq!(props.severity_counts(), (0, 0));
        assert_eq!(props.summary.total_revenue, 0.0);
        assert!(props.charts.months.is_empty());
    }

    #[test]
    fn test_type_field_wire_name() {
        let props: InsightsProps = serde_json::from_value(json!({
            "insights": [{ "type": "metric", "severity": "success", "title": "x" }],
        }))
        .unwrap();
        assert_eq!(props.insights[0].kind, "metric");
        let rendered = serde_json::to_value(&props).unwrap();
        assert_eq!(rendered["insights"][0]["type"], "metric");
    }
}
