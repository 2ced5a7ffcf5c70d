//! 组合器错误类型

use thiserror::Error;

/// 组合器统一错误
#[derive(Debug, Error)]
pub enum ComposerError {
    /// 用户输入不满足前置条件（例如自定义章节名为空）
    #[error("validation failed: {0}")]
    Validation(String),

    /// 派生出的章节键与已有章节冲突
    #[error("section key already exists: {0}")]
    DuplicateKey(String),

    /// 章节键不存在
    #[error("unknown section: {0}")]
    UnknownSection(String),

    /// 任意对外HTTP调用失败（非2xx、连接失败、仓库地址格式错误）
    #[error("network error: {0}")]
    Network(String),

    /// 所选AI模型没有对应的适配器
    #[error("unsupported AI model: {0}")]
    UnsupportedProvider(String),

    /// 已有一次生成正在进行
    #[error("an AI generation is already in progress")]
    GenerationInProgress,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for ComposerError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ComposerError::Network(format!("HTTP {}: {}", status, err)),
            None => ComposerError::Network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ComposerError>;
