//! LLM客户端 - 提供统一的补全接口

use async_trait::async_trait;
use std::future::Future;

use crate::config::{LLMConfig, ModelSelection};
use crate::error::{ComposerError, Result};

mod providers;

use providers::ProviderClient;

/// README写作助手的系统提示词
pub const SYSTEM_PROMPT: &str = "You are an expert technical writer. You write clear, accurate and well-structured README files for software projects and never invent features that the provided material does not support.";

/// 补全接口：输入一段提示词，返回一段文本
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// LLM客户端
#[derive(Clone)]
pub struct LLMClient {
    config: LLMConfig,
    selection: ModelSelection,
    client: ProviderClient,
}

impl LLMClient {
    /// 根据配置中的模型变体创建客户端
    pub fn new(config: LLMConfig) -> Result<Self> {
        let selection = config.resolve_model()?;
        if config.api_key.trim().is_empty() {
            return Err(ComposerError::Validation(format!(
                "an API key is required for {}",
                selection.provider
            )));
        }
        let client = ProviderClient::new(selection.provider, &config)?;
        Ok(Self {
            config,
            selection,
            client,
        })
    }

    pub fn selection(&self) -> &ModelSelection {
        &self.selection
    }

    /// 通用重试逻辑，`retry_attempts`为1时只调用一次
    async fn retry_with_backoff<T, F, Fut>(&self, operation: F) -> Result<T>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let max_attempts = self.config.retry_attempts.max(1);
        let retry_delay_ms = self.config.retry_delay_ms;
        let mut attempts = 0;

        loop {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(err) => {
                    attempts += 1;
                    if attempts >= max_attempts {
                        return Err(err);
                    }
                    tracing::warn!(
                        attempt = attempts,
                        max_attempts,
                        error = %err,
                        "model call failed, retrying"
                    );
                    tokio::time::sleep(std::time::Duration::from_millis(retry_delay_ms)).await;
                }
            }
        }
    }
}

#[async_trait]
impl CompletionProvider for LLMClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let agent = self
            .client
            .create_agent(&self.selection.model, SYSTEM_PROMPT, &self.config)?;
        tracing::debug!(
            provider = %self.selection.provider,
            model = %self.selection.model,
            prompt_chars = prompt.chars().count(),
            "sending completion request"
        );
        self.retry_with_backoff(|| agent.prompt(prompt)).await
    }
}
