use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use crate::error::ComposerError;
use crate::i18n::TargetLanguage;

/// LLM Provider类型
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum LLMProvider {
    #[serde(rename = "openai")]
    #[default]
    OpenAI,
    #[serde(rename = "gemini")]
    Gemini,
    #[serde(rename = "anthropic")]
    Anthropic,
}

impl std::fmt::Display for LLMProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LLMProvider::OpenAI => write!(f, "openai"),
            LLMProvider::Gemini => write!(f, "gemini"),
            LLMProvider::Anthropic => write!(f, "anthropic"),
        }
    }
}

impl std::str::FromStr for LLMProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openai" => Ok(LLMProvider::OpenAI),
            "gemini" => Ok(LLMProvider::Gemini),
            "anthropic" => Ok(LLMProvider::Anthropic),
            _ => Err(format!("Unknown provider: {}", s)),
        }
    }
}

/// 用户选择的模型变体解析后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSelection {
    pub provider: LLMProvider,
    pub model: String,
}

impl ModelSelection {
    /// 解析模型变体名称（gpt-4、gpt-3.5、gemini、claude）
    pub fn from_variant(variant: &str) -> crate::error::Result<Self> {
        let (provider, model) = match variant.trim().to_lowercase().as_str() {
            "gpt-4" => (LLMProvider::OpenAI, "gpt-4"),
            "gpt-3.5" => (LLMProvider::OpenAI, "gpt-3.5-turbo"),
            "gemini" => (LLMProvider::Gemini, "gemini-1.5-flash"),
            "claude" => (LLMProvider::Anthropic, "claude-3-5-sonnet-latest"),
            _ => return Err(ComposerError::UnsupportedProvider(variant.to_string())),
        };
        Ok(Self {
            provider,
            model: model.to_string(),
        })
    }
}

/// 应用程序配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct Config {
    /// 输出目录，README.md 写入其中
    pub output_path: PathBuf,

    /// README输出语言
    pub target_language: TargetLanguage,

    /// 是否同时输出HTML预览
    pub preview_html: bool,

    /// 是否将结果打印到标准输出而不写文件
    pub print_to_stdout: bool,

    /// 是否启用详细日志
    pub verbose: bool,

    /// LLM模型配置
    pub llm: LLMConfig,

    /// 代码仓库配置
    pub github: GitHubConfig,

    /// 文档内容
    pub document: DocumentConfig,
}

/// LLM模型配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct LLMConfig {
    /// 模型变体 (gpt-4, gpt-3.5, gemini, claude)，为空时不进行AI填充
    pub model_variant: Option<String>,

    /// LLM API KEY，仅保存在内存中
    #[serde(skip_serializing)]
    pub api_key: String,

    /// 覆盖变体对应的默认模型名称
    pub model: Option<String>,

    /// LLM API基地址（仅OpenAI兼容接口使用）
    pub api_base_url: Option<String>,

    /// 最大tokens
    pub max_tokens: u32,

    /// 温度
    pub temperature: f64,

    /// 尝试次数，1表示不自动重试
    pub retry_attempts: u32,

    /// 重试间隔（毫秒）
    pub retry_delay_ms: u64,

    /// 超时时间（秒）
    pub timeout_seconds: u64,
}

/// 代码仓库配置
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct GitHubConfig {
    /// 要读取的仓库地址，为空时从当前字段生成
    pub repository: Option<String>,

    /// 分支
    pub branch: String,

    /// GitHub API基地址
    pub api_base_url: String,

    /// 原始文件内容基地址
    pub raw_base_url: String,

    /// 最多读取的文件数
    pub max_files: usize,

    /// 每个文件写入提示词的最大字符数
    pub excerpt_chars: usize,
}

/// 文档内容配置
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[serde(default)]
pub struct DocumentConfig {
    pub title: String,

    pub description: String,

    /// 额外启用的章节
    pub enable: Vec<String>,

    /// 禁用的章节
    pub disable: Vec<String>,

    /// 追加的自定义章节（显示名称）
    pub custom_sections: Vec<String>,

    /// 章节键到内容的映射
    pub content: BTreeMap<String, String>,
}

impl Config {
    /// 从文件加载配置
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let mut file =
            File::open(path).context(format!("Failed to open config file: {:?}", path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read config file")?;

        let config: Config = toml::from_str(&content).context("Failed to parse config file")?;
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_path: PathBuf::from("."),
            target_language: TargetLanguage::default(),
            preview_html: false,
            print_to_stdout: false,
            verbose: false,
            llm: LLMConfig::default(),
            github: GitHubConfig::default(),
            document: DocumentConfig::default(),
        }
    }
}

impl LLMConfig {
    /// 解析模型变体，并应用模型名称覆盖
    pub fn resolve_model(&self) -> crate::error::Result<ModelSelection> {
        let variant = self
            .model_variant
            .as_deref()
            .ok_or_else(|| ComposerError::UnsupportedProvider("<none>".to_string()))?;
        let mut selection = ModelSelection::from_variant(variant)?;
        if let Some(model) = self.model.as_deref()
            && !model.trim().is_empty()
        {
            selection.model = model.trim().to_string();
        }
        Ok(selection)
    }
}

impl Default for LLMConfig {
    fn default() -> Self {
        Self {
            model_variant: None,
            api_key: std::env::var("README_COMPOSER_API_KEY").unwrap_or_default(),
            model: None,
            api_base_url: None,
            max_tokens: 4096,
            temperature: 0.7,
            retry_attempts: 1,
            retry_delay_ms: 2000,
            timeout_seconds: 120,
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            repository: None,
            branch: String::from("main"),
            api_base_url: String::from("https://api.github.com"),
            raw_base_url: String::from("https://raw.githubusercontent.com"),
            max_files: 15,
            excerpt_chars: 2000,
        }
    }
}
