//! 后端网关客户端
//!
//! 所有工具对后端 AR/AP 服务的唯一出口：相对路径 + JSON 请求体，固定 JSON Content-Type。
//! 非 2xx 转 ToolError::Gateway（携带状态码与原始响应文本，错误响应不保证是 JSON，不做解析）；
//! 2xx 但 JSON 不可解析转 InvalidResponse。本层不重试、不设超时，重试与限时由调用方决定。

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ToolError;

/// 后端网关客户端：共享 reqwest::Client，按调用方期望的类型解析响应
#[derive(Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let client = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_default();

        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST JSON 请求体，按 T 解析响应
    pub async fn post<T: DeserializeOwned>(&self, path: &str, body: &Value) -> Result<T, ToolError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| ToolError::Request(e.to_string()))?;
        Self::parse_response(resp).await
    }

    /// GET 带查询参数，按 T 解析响应
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ToolError> {
        let url = format!("{}{}", self.base_url, path);
        let resp = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ToolError::Request(e.to_string()))?;
        Self::parse_response(resp).await
    }

    async fn parse_response<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, ToolError> {
        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| ToolError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ToolError::Gateway {
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ToolError::InvalidResponse(e.to_string()))
    }
}
