//! 应用配置：从 config/default.toml 与环境变量加载
//!
//! 加载顺序：先读 TOML 文件，再用环境变量 `LEDGIFY__*` 覆盖
//! （双下划线表示嵌套，如 `LEDGIFY__BACKEND__BASE_URL=http://api:8000`）。

use std::path::PathBuf;

use serde::Deserialize;

/// 应用配置根（对应 config/default.toml 的顶层）
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendSection,
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub tools: ToolsSection,
}

/// [backend] 段：后端 AR/AP 服务地址
#[derive(Debug, Clone, Deserialize)]
pub struct BackendSection {
    /// 后端服务 Base URL（所有工具的唯一数据来源）
    #[serde(default = "default_backend_base_url")]
    pub base_url: String,
}

fn default_backend_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            base_url: default_backend_base_url(),
        }
    }
}

/// [server] 段：宿主侧服务的监听地址与对外公布的 Base URL
#[derive(Debug, Clone, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// 对宿主公布的本层 Base URL（写入工具清单，不影响监听）
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_bind() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            base_url: default_base_url(),
        }
    }
}

/// [tools] 段：工具层缺省值（连接标识随调用显式传递，不做全局状态）
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsSection {
    /// 未指定 connectionId 时使用的连接标识
    #[serde(default = "default_connection_id")]
    pub default_connection_id: String,
}

fn default_connection_id() -> String {
    "demo".to_string()
}

impl Default for ToolsSection {
    fn default() -> Self {
        Self {
            default_connection_id: default_connection_id(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendSection::default(),
            server: ServerSection::default(),
            tools: ToolsSection::default(),
        }
    }
}

/// 从 config 目录加载配置，环境变量 LEDGIFY__* 可覆盖
///
/// 1. 按顺序查找 config/default.toml、../config/default.toml、default.toml，找到则作为第一源
/// 2. 若传入 config_path 且文件存在，则追加该文件（可覆盖前面的键）
/// 3. 最后叠加环境变量 LEDGIFY__*（双下划线表示嵌套键）
pub fn load_config(config_path: Option<PathBuf>) -> Result<AppConfig, config::ConfigError> {
    let mut builder = config::Config::builder();

    let default_names = ["config/default", "../config/default", "default"];
    for name in default_names {
        let path = format!("{}.toml", name);
        if std::path::Path::new(&path).exists() {
            builder = builder.add_source(config::File::with_name(name).required(false));
            break;
        }
    }

    if let Some(ref path) = config_path {
        if path.exists() {
            builder = builder.add_source(config::File::from(path.clone()).required(false));
        }
    }

    builder = builder.add_source(
        config::Environment::with_prefix("LEDGIFY")
            .separator("__")
            .try_parsing(true),
    );

    let c = builder.build()?;
    c.try_deserialize()
}
