//! 工具注册表
//!
//! 所有工具实现 Tool trait（name / description / input_schema / widget / execute），
//! 由 ToolRegistry 按名注册与查找，ToolExecutor 在调用时统一校验入参并输出审计日志。
//! 工具结果分两类：绑定 Widget 的（props + 状态行）与纯结构化对象（无可视化跟进）。

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ToolError;
use crate::tools::schema::ToolSchema;

/// Widget 绑定：Widget 名与调用前后的状态标签（宿主在工具运行期间展示）
#[derive(Debug, Clone)]
pub struct WidgetBinding {
    pub name: &'static str,
    pub invoking: &'static str,
    pub invoked: &'static str,
}

/// 工具结果：绑定 Widget 的（规整后的 props + 人类可读状态行）或纯结构化对象
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutcome {
    Widget {
        widget: &'static str,
        props: Value,
        output: String,
    },
    Object(Value),
}

impl ToolOutcome {
    /// 状态行（Object 结果无状态行）
    pub fn output_text(&self) -> Option<&str> {
        match self {
            ToolOutcome::Widget { output, .. } => Some(output),
            ToolOutcome::Object(_) => None,
        }
    }

    /// Widget props（Object 结果返回 None）
    pub fn props(&self) -> Option<&Value> {
        match self {
            ToolOutcome::Widget { props, .. } => Some(props),
            ToolOutcome::Object(_) => None,
        }
    }
}

/// 工具 trait：名称、描述（供宿主 Agent 理解）、入参 Schema、Widget 绑定、异步执行
///
/// execute 收到的 args 已经过 ToolSchema::validate 规整（缺省值已填、类型已检查），
/// 实现内部用 as_str/as_i64 取值不会落空。
#[async_trait]
pub trait Tool: Send + Sync {
    /// 工具名称（用于 JSON 中的 "tool" 字段）
    fn name(&self) -> &str;

    /// 工具描述（供宿主 Agent 理解功能与适用场景）
    fn description(&self) -> &str;

    /// 入参 Schema（统一校验与清单公布共用）
    fn input_schema(&self) -> ToolSchema;

    /// 绑定的 Widget（纯结构化输出的工具返回 None）
    fn widget(&self) -> Option<WidgetBinding> {
        None
    }

    /// 执行工具（args 为已规整入参）
    async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError>;
}

/// 工具注册表：按名称存储 Arc<dyn Tool>，支持 register / get / tool_names / descriptors
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        self.tools.insert(name, Arc::new(tool));
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    pub fn tool_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.tools.keys().cloned().collect();
        names.sort();
        names
    }

    /// 工具清单条目：名称、描述、渲染后的入参 JSON Schema、Widget 绑定标签
    pub fn descriptors(&self) -> Vec<Value> {
        self.tool_names()
            .into_iter()
            .filter_map(|name| self.tools.get(&name))
            .map(|tool| {
                let widget = tool.widget().map(|w| {
                    serde_json::json!({
                        "name": w.name,
                        "invoking": w.invoking,
                        "invoked": w.invoked,
                    })
                });
                serde_json::json!({
                    "name": tool.name(),
                    "description": tool.description(),
                    "inputSchema": tool.input_schema().to_json_schema(),
                    "widget": widget,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::tools::schema::{FieldKind, FieldSpec};

    struct PingTool;

    #[async_trait]
    impl Tool for PingTool {
        fn name(&self) -> &str {
            "ping"
        }

        fn description(&self) -> &str {
            "Reply pong"
        }

        fn input_schema(&self) -> ToolSchema {
            ToolSchema::new(vec![FieldSpec::optional(
                "connectionId",
                FieldKind::String,
                json!("demo"),
                "Connection ID",
            )])
        }

        async fn execute(&self, args: Value) -> Result<ToolOutcome, ToolError> {
            Ok(ToolOutcome::Object(json!({ "pong": args["connectionId"] })))
        }
    }

    #[tokio::test]
    async fn test_register_and_execute() {
        let mut registry = ToolRegistry::new();
        registry.register(PingTool);

        let tool = registry.get("ping").unwrap();
        let args = tool.input_schema().validate(&json!({})).unwrap();
        let outcome = tool.execute(args).await.unwrap();
        assert_eq!(outcome, ToolOutcome::Object(json!({ "pong": "demo" })));
        assert!(outcome.props().is_none());
    }

    #[test]
    fn test_descriptors_carry_schema() {
        let mut registry = ToolRegistry::new();
        registry.register(PingTool);

        let descriptors = registry.descriptors();
        assert_eq!(descriptors.len(), 1);
        assert_eq!(descriptors[0]["name"], "ping");
        assert!(descriptors[0]["widget"].is_null());
        assert_eq!(
            descriptors[0]["inputSchema"]["properties"]["connectionId"]["default"],
            "demo"
        );
    }
}
