//! Ledgify 主程序：加载配置，注册工具，启动宿主侧服务

use std::sync::Arc;

use ledgify::config::load_config;
use ledgify::gateway::BackendClient;
use ledgify::server::{create_router, ServerState};
use ledgify::tools::{build_registry, ToolExecutor};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ledgify::observability::init();

    let config = load_config(None)?;
    tracing::info!(backend = %config.backend.base_url, "Ledgify starting");

    let client = BackendClient::new(config.backend.base_url.clone());
    let registry = build_registry(&client);
    let executor = ToolExecutor::new(registry);
    tracing::info!(tools = ?executor.tool_names(), "Tools registered");

    let state = Arc::new(ServerState {
        executor,
        base_url: config.server.base_url.clone(),
    });
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.server.bind).await?;
    tracing::info!(bind = %config.server.bind, "Ledgify serving");
    axum::serve(listener, router).await?;

    Ok(())
}
