pub mod plot;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("配置解析失败: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("配置文件读取失败: {0}")]
    Io(#[from] std::io::Error),
    #[error("配置非法: {0}")]
    Invalid(String),
}
