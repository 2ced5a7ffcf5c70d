use crate::config::Config;
use crate::generator::context::ComposerContext;
use crate::generator::fill::{fill_from_fields, fill_from_repository};
use crate::generator::outlet;
use crate::generator::parser::AiFields;
use crate::github::{GitHubClient, RepositoryRef, SourceHost};
use crate::llm::client::{CompletionProvider, LLMClient};
use crate::registry::{SectionRegistry, derive_key};
use crate::store::ComposerStore;
use crate::types::section::SectionKey;

use anyhow::{Context, Result, bail};
use std::time::Instant;

/// 启动README生成工作流
pub async fn launch(config: &Config) -> Result<()> {
    let started = Instant::now();
    let context = ComposerContext::new(config.clone(), build_store(config)?);

    if config.llm.model_variant.is_some() {
        let client = LLMClient::new(config.llm.clone()).context("Failed to create LLM client")?;
        let selection = client.selection();
        println!("🤖 Using {} model {}", selection.provider, selection.model);

        let host = match config.github.repository {
            Some(_) => Some(
                GitHubClient::new(&config.github, config.llm.timeout_seconds)
                    .context("Failed to create GitHub client")?,
            ),
            None => None,
        };
        execute(
            &context,
            Some(&client),
            host.as_ref().map(|h| h as &dyn SourceHost),
        )
        .await?;
    } else {
        if config.github.repository.is_some() {
            eprintln!("⚠️ A repository was given without an AI model, it will be ignored");
        }
        execute(&context, None, None).await?;
    }

    tracing::debug!(elapsed_ms = started.elapsed().as_millis() as u64, "workflow finished");
    Ok(())
}

/// 执行AI填充（如果提供了模型）并输出文档
pub async fn execute(
    context: &ComposerContext,
    provider: Option<&dyn CompletionProvider>,
    host: Option<&dyn SourceHost>,
) -> Result<()> {
    if let Some(provider) = provider {
        let fields = match (host, context.config.github.repository.as_deref()) {
            (Some(host), Some(url)) => {
                let repo = RepositoryRef::parse(url, &context.config.github.branch)
                    .context("Invalid repository")?;
                println!("🔍 Reading repository {}...", repo);
                fill_from_repository(context, host, provider, &repo)
                    .await
                    .context("AI fill from repository failed")?
            }
            _ => {
                println!("✍️ Asking the model to fill in the sections...");
                fill_from_fields(context, provider)
                    .await
                    .context("AI fill failed")?
            }
        };
        report_fields(&fields);
    }

    if context.config.print_to_stdout {
        print!("{}", context.render().await);
    } else {
        outlet::save(context)
            .await
            .context("Failed to save README")?;
        println!("✅ Done, output directory: {}", context.config.output_path.display());
    }
    Ok(())
}

fn report_fields(fields: &AiFields) {
    if fields.is_empty() {
        eprintln!("⚠️ The model response did not contain any usable fields");
        return;
    }
    let sections: Vec<String> = fields
        .sections()
        .iter()
        .map(|(key, _)| key.to_string())
        .collect();
    println!(
        "📝 Filled {} field(s){}",
        fields.populated(),
        if sections.is_empty() {
            String::new()
        } else {
            format!(": {}", sections.join(", "))
        }
    );
}

/// 由配置构建初始文档状态
pub fn build_store(config: &Config) -> Result<ComposerStore> {
    let document = &config.document;
    let mut registry = SectionRegistry::new();

    for name in &document.custom_sections {
        registry
            .add_custom_section(name)
            .with_context(|| format!("Failed to add custom section '{}'", name))?;
    }

    for name in &document.enable {
        let key = resolve_key(&registry, name)?;
        registry.set_enabled(&key, true);
    }
    for name in &document.disable {
        let key = resolve_key(&registry, name)?;
        registry.set_enabled(&key, false);
    }
    for (name, text) in &document.content {
        let key = resolve_key(&registry, name)?;
        registry.update_content(&key, text.as_str())?;
    }

    let mut store = ComposerStore::new(registry);
    store.set_title(document.title.trim());
    store.set_description(document.description.trim());
    store.language = config.target_language;
    Ok(store)
}

/// 将用户输入的章节名解析为注册表中的键
///
/// 依次尝试：内置章节的宽松匹配、原样的键、由显示名称派生的键。
pub fn resolve_key(registry: &SectionRegistry, name: &str) -> Result<String> {
    if let Some(key) = SectionKey::parse_builtin(name)
        && registry.contains(&key)
    {
        return Ok(key.as_str().to_string());
    }

    let name = name.trim();
    if registry.contains(name) {
        return Ok(name.to_string());
    }
    let derived = derive_key(name);
    if registry.contains(&derived) {
        return Ok(derived);
    }

    bail!("Unknown section '{}'", name)
}
