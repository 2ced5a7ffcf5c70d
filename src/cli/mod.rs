use crate::config::Config;
use crate::i18n::TargetLanguage;
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

/// 默认配置文件名
pub const DEFAULT_CONFIG_FILE: &str = "readme-composer.toml";

/// README Composer - 组合章节并可选地由AI补全的README生成器
#[derive(Parser, Debug)]
#[command(name = "readme-composer")]
#[command(
    about = "Compose a README.md from toggleable sections, optionally filled in by an AI model from your project details or a GitHub repository."
)]
#[command(version)]
pub struct Args {
    /// 配置文件路径
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 输出目录
    #[arg(short, long)]
    pub output_path: Option<PathBuf>,

    /// 项目标题
    #[arg(short, long)]
    pub title: Option<String>,

    /// 项目描述
    #[arg(short, long)]
    pub description: Option<String>,

    /// 启用章节，可重复
    #[arg(long = "enable", value_name = "KEY")]
    pub enable: Vec<String>,

    /// 禁用章节，可重复
    #[arg(long = "disable", value_name = "KEY")]
    pub disable: Vec<String>,

    /// 添加自定义章节，可重复
    #[arg(long = "add-section", value_name = "NAME")]
    pub add_section: Vec<String>,

    /// AI模型 (gpt-4, gpt-3.5, gemini, claude)
    #[arg(long)]
    pub ai_model: Option<String>,

    /// 模型API KEY，仅保存在内存中
    #[arg(long)]
    pub api_key: Option<String>,

    /// 覆盖模型变体对应的具体模型名
    #[arg(long)]
    pub model: Option<String>,

    /// GitHub仓库地址或owner/repo
    #[arg(long)]
    pub repo: Option<String>,

    /// 仓库分支
    #[arg(long)]
    pub branch: Option<String>,

    /// 目标语言 (en, zh, ja, de, fr, ...)
    #[arg(long)]
    pub language: Option<String>,

    /// 同时输出HTML预览
    #[arg(long)]
    pub html: bool,

    /// 输出到标准输出而不是写文件
    #[arg(long)]
    pub stdout: bool,

    /// 是否启用详细日志
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// 将CLI参数转换为配置
    pub fn into_config(self) -> Result<Config> {
        let mut config = match &self.config {
            // 显式指定的配置文件必须可读
            Some(config_path) => Config::from_file(config_path)
                .with_context(|| format!("Failed to load config file {}", config_path.display()))?,
            None => {
                let default_config_path = std::env::current_dir()
                    .unwrap_or_else(|_| PathBuf::from("."))
                    .join(DEFAULT_CONFIG_FILE);
                if default_config_path.exists() {
                    Config::from_file(&default_config_path).with_context(|| {
                        format!(
                            "Failed to load config file {}",
                            default_config_path.display()
                        )
                    })?
                } else {
                    Config::default()
                }
            }
        };

        self.apply_to(&mut config)?;
        Ok(config)
    }

    /// 用命令行参数覆盖配置中的设置
    pub fn apply_to(self, config: &mut Config) -> Result<()> {
        if let Some(output_path) = self.output_path {
            config.output_path = output_path;
        }

        // 文档内容
        if let Some(title) = self.title {
            config.document.title = title;
        }
        if let Some(description) = self.description {
            config.document.description = description;
        }
        config.document.custom_sections.extend(self.add_section);
        config.document.enable.extend(self.enable);
        config.document.disable.extend(self.disable);

        // LLM配置
        if let Some(ai_model) = self.ai_model {
            config.llm.model_variant = Some(ai_model);
        }
        if let Some(api_key) = self.api_key {
            config.llm.api_key = api_key;
        }
        if let Some(model) = self.model {
            config.llm.model = Some(model);
        }
        // 尽早暴露不支持的模型变体
        if config.llm.model_variant.is_some() {
            config.llm.resolve_model()?;
        }

        // 仓库配置
        if let Some(repo) = self.repo {
            config.github.repository = Some(repo);
        }
        if let Some(branch) = self.branch {
            config.github.branch = branch;
        }

        // 目标语言配置
        if let Some(language) = self.language {
            match language.parse::<TargetLanguage>() {
                Ok(target_language) => config.target_language = target_language,
                Err(e) => eprintln!("⚠️ {}, using {}", e, config.target_language.display_name()),
            }
        }

        // 其他配置
        config.preview_html |= self.html;
        config.print_to_stdout |= self.stdout;
        config.verbose |= self.verbose;
        Ok(())
    }
}

// Include tests
#[cfg(test)]
mod tests;
