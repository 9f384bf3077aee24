//! 宿主侧 HTTP 服务
//!
//! 面向宿主 Agent 的三个入口：
//! - GET  /health        存活探针
//! - GET  /tools         工具清单（名称、描述、入参 JSON Schema、Widget 绑定）+ 调用信封 Schema
//! - POST /tools/:name   调用工具，body 为入参对象；响应为 widget / object / error 三态

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use crate::error::ToolError;
use crate::tools::{tool_call_schema_json, ToolExecutor, ToolOutcome};

/// 服务状态：执行器 + 对外公布的 Base URL
pub struct ServerState {
    pub executor: ToolExecutor,
    pub base_url: String,
}

/// 创建宿主侧路由
pub fn create_router(state: Arc<ServerState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/tools", get(list_tools))
        .route("/tools/:name", post(invoke_tool))
        .with_state(state)
}

/// GET /health
async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "service": "ledgify" }))
}

/// GET /tools - 工具清单
async fn list_tools(State(state): State<Arc<ServerState>>) -> Json<Value> {
    let call_schema: Value =
        serde_json::from_str(&tool_call_schema_json()).unwrap_or(Value::Null);
    Json(json!({
        "service": "ledgify",
        "baseUrl": state.base_url,
        "tools": state.executor.registry().descriptors(),
        "callSchema": call_schema,
    }))
}

/// POST /tools/:name - 调用工具
async fn invoke_tool(
    State(state): State<Arc<ServerState>>,
    Path(name): Path<String>,
    Json(args): Json<Value>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match state.executor.execute(&name, args).await {
        Ok(ToolOutcome::Widget {
            widget,
            props,
            output,
        }) => Ok(Json(json!({
            "type": "widget",
            "widget": widget,
            "props": props,
            "output": output,
        }))),
        Ok(ToolOutcome::Object(result)) => Ok(Json(json!({
            "type": "object",
            "result": result,
        }))),
        Err(e) => Err((status_for(&e), Json(json!({ "error": e.to_string() })))),
    }
}

fn status_for(e: &ToolError) -> StatusCode {
    match e {
        ToolError::UnknownTool(_) => StatusCode::NOT_FOUND,
        ToolError::InvalidInput(_) => StatusCode::BAD_REQUEST,
        // 后端侧失败统一按网关错误上抛；宿主可原样展示并让用户重试
        ToolError::Gateway { .. } | ToolError::InvalidResponse(_) | ToolError::Request(_) => {
            StatusCode::BAD_GATEWAY
        }
    }
}
