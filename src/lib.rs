//! Ledgify - AR/AP 工具编排层
//!
//! 模块划分：
//! - **config**: 应用配置加载（TOML + 环境变量）
//! - **error**: 工具层错误类型（入参 / 网关 / 调度）
//! - **gateway**: 后端网关客户端（唯一的数据出口，无重试无超时）
//! - **observability**: tracing 初始化
//! - **server**: 宿主侧 HTTP 服务（工具清单与调用入口）
//! - **tools**: 七个 AR/AP 工具、入参 Schema、注册表与执行器
//! - **widgets**: Widget props 契约、响应规整、草稿会话状态机

pub mod config;
pub mod error;
pub mod gateway;
pub mod observability;
pub mod server;
pub mod tools;
pub mod widgets;

pub use error::ToolError;
pub use gateway::BackendClient;
