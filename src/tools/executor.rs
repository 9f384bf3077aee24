//! 工具执行器
//!
//! 持有 ToolRegistry，execute(tool_name, args) 先按工具声明的 Schema 校验入参
//! （失败即 InvalidInput，不发起后端调用），再调用工具本体；每次调用输出
//! 结构化审计日志（JSON，含请求 id 与耗时）。本层不加超时：工具的唯一挂起点
//! 是后端网络往返，限时与重试由调用方自行叠加。

use std::time::Instant;

use serde_json::Value;
use uuid::Uuid;

use crate::error::ToolError;
use crate::tools::registry::{ToolOutcome, ToolRegistry};

/// 工具执行器：校验入参、分发调用、输出审计日志
pub struct ToolExecutor {
    registry: ToolRegistry,
}

impl ToolExecutor {
    pub fn new(registry: ToolRegistry) -> Self {
        Self { registry }
    }

    /// 执行指定工具；未注册返回 UnknownTool，入参不合法返回 InvalidInput
    pub async fn execute(&self, tool_name: &str, args: Value) -> Result<ToolOutcome, ToolError> {
        let tool = self
            .registry
            .get(tool_name)
            .ok_or_else(|| ToolError::UnknownTool(tool_name.to_string()))?;

        let request_id = Uuid::new_v4();
        let start = Instant::now();
        let validated = tool.input_schema().validate(&args)?;
        let args_preview = args_preview(&validated);

        let result = tool.execute(validated).await;

        let outcome: &str = match &result {
            Ok(ToolOutcome::Widget { .. }) => "widget",
            Ok(ToolOutcome::Object(_)) => "object",
            Err(e) if e.is_input_error() => "invalid_input",
            Err(_) => "error",
        };
        let duration_ms = start.elapsed().as_millis() as u64;
        let audit = serde_json::json!({
            "event": "tool_audit",
            "request_id": request_id.to_string(),
            "tool": tool_name,
            "ok": result.is_ok(),
            "outcome": outcome,
            "duration_ms": duration_ms,
            "args_preview": args_preview,
        });
        tracing::info!(audit = %audit.to_string(), "tool");

        result
    }

    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    pub fn tool_names(&self) -> Vec<String> {
        self.registry.tool_names()
    }
}

fn args_preview(args: &Value) -> String {
    let s = args.to_string();
    if s.len() > 200 {
        format!("{}...", s.chars().take(200).collect::<String>())
    } else {
        s
    }
}
