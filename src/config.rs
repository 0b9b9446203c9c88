use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

/// 配置文件名 (工作目录下，可选)
const CONFIG_FILE: &str = "receipt-points";
/// 环境变量前缀，如 RECEIPTS__SERVER__PORT=9090
const ENV_PREFIX: &str = "RECEIPTS";

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub compat: CompatConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// 兼容旧服务的宽松行为
///
/// 开启后：请求体无法解析时仍返回ID (0 分)，字段解析失败按 0 分计，
/// 未知ID返回 `{"points": 0}` 而不是 404。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompatConfig {
    #[serde(default)]
    pub legacy: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl AppConfig {
    /// 加载配置：默认值 < receipt-points.toml < 环境变量
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Self::default();
        Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", defaults.server.port as i64)?
            .set_default("compat.legacy", defaults.compat.legacy)
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
