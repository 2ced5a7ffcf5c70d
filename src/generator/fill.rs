//! AI填充 - 调用模型生成内容并合并回文档状态

use std::future::Future;

use crate::error::{ComposerError, Result};
use crate::generator::context::ComposerContext;
use crate::generator::parser::{AiFields, parse_response};
use crate::generator::prompt::{build_fields_prompt, build_repository_prompt_with_limit};
use crate::github::{RepositoryRef, SourceHost, fetch_repository_files};
use crate::llm::client::CompletionProvider;
use crate::store::ComposerStore;

/// 根据当前标题与描述让模型补全各章节
pub async fn fill_from_fields(
    context: &ComposerContext,
    provider: &dyn CompletionProvider,
) -> Result<AiFields> {
    let (prompt, fallback_title) = {
        let mut store = context.store.write().await;
        store.begin_generation()?;
        let prompt = build_fields_prompt(&store.snapshot(), store.language);
        (prompt, store.title.clone())
    };

    run_generation(context, async {
        let raw = provider.complete(&prompt).await?;
        Ok::<_, ComposerError>(parse_response(&raw, Some(fallback_title.as_str())))
    })
    .await
}

/// 读取仓库文件后让模型补全各章节
pub async fn fill_from_repository(
    context: &ComposerContext,
    host: &dyn SourceHost,
    provider: &dyn CompletionProvider,
    repo: &RepositoryRef,
) -> Result<AiFields> {
    let (language, fallback_title) = {
        let mut store = context.store.write().await;
        store.begin_generation()?;
        let title = store.title.trim();
        let fallback = if title.is_empty() {
            repo.repo.clone()
        } else {
            title.to_string()
        };
        (store.language, fallback)
    };

    let github = &context.config.github;
    run_generation(context, async {
        let files = fetch_repository_files(host, repo, github.max_files).await?;
        let prompt = build_repository_prompt_with_limit(&files, language, github.excerpt_chars);
        let raw = provider.complete(&prompt).await?;
        Ok::<_, ComposerError>(parse_response(&raw, Some(fallback_title.as_str())))
    })
    .await
}

/// 执行生成并在结束后清除生成标记；成功时把结果合并进文档状态
async fn run_generation<F>(context: &ComposerContext, generation: F) -> Result<AiFields>
where
    F: Future<Output = Result<AiFields>>,
{
    let outcome = generation.await;

    let mut store = context.store.write().await;
    store.end_generation();
    let fields = outcome?;
    apply_fields(&mut store, &fields);
    Ok(fields)
}

/// 将解析出的字段合并进文档状态，未提供的字段保持不变
pub fn apply_fields(store: &mut ComposerStore, fields: &AiFields) {
    if let Some(title) = &fields.title {
        store.set_title(title.clone());
    }
    if let Some(description) = &fields.description {
        store.set_description(description.clone());
    }
    for (key, text) in fields.sections() {
        if let Err(err) = store.registry.update_content(&key, text) {
            tracing::warn!(key = %key, error = %err, "generated content has no section to land in");
        }
    }
}
