//! 工具层错误类型
//!
//! 三类失败的统一口径：入参校验失败（InvalidInput，发起网络请求前即返回）、
//! 网关失败（Gateway / InvalidResponse / Request，后端非 2xx 或响应不可解析）、
//! 调度失败（UnknownTool）。后端 2xx 但带 {status:"error"} 的业务错误不在此枚举内，
//! 由各工具按「软错误」策略就地吸收（见 widgets 模块）。

use thiserror::Error;

/// 工具调用过程中可能出现的错误
#[derive(Error, Debug)]
pub enum ToolError {
    /// 入参不符合工具声明的 Schema（缺必填字段、类型不符、枚举值非法）
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 后端返回非 2xx 状态；body 为原始响应文本（错误响应不保证是 JSON）
    #[error("Backend error {status}: {body}")]
    Gateway { status: u16, body: String },

    /// 后端返回 2xx 但 JSON 不可解析或与期望类型不符
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),

    /// 传输层失败（连接被拒、DNS、I/O 中断等）
    #[error("Request failed: {0}")]
    Request(String),

    #[error("Unknown tool: {0}")]
    UnknownTool(String),
}

impl ToolError {
    /// 是否为入参错误（宿主可直接修正参数后重试，无需怀疑后端）
    pub fn is_input_error(&self) -> bool {
        matches!(self, ToolError::InvalidInput(_) | ToolError::UnknownTool(_))
    }
}
