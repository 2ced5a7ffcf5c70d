//! 提示词构建

use crate::generator::parser::AiFields;
use crate::github::RepositoryFile;
use crate::i18n::TargetLanguage;
use crate::types::document::Document;

/// 每个文件写入提示词的默认最大字符数
pub const DEFAULT_EXCERPT_CHARS: usize = 2000;

const FILE_HEADER: &str = "=== FILE: ";
const FILE_HEADER_END: &str = " ===";
const FILE_FOOTER: &str = "=== END FILE ===";
const TRUNCATED_MARKER: &str = "[... truncated ...]";

const REPOSITORY_RULES: &str = "Analyze the following files from a source code repository and write a README for the project.

Rules:
- Cover these fields: title, description, features, tech stack, installation, usage.
- Base every statement on the files below and do not invent features.
- Keep the description to one or two sentences.
- Use GitHub-flavored Markdown inside each field and put shell commands in fenced code blocks.
- Derive installation and usage steps from the package manifests and scripts you can see.";

/// 要求模型按字段返回JSON的说明
pub fn output_contract() -> String {
    let schema = schemars::schema_for!(AiFields);
    let schema = serde_json::to_string_pretty(&schema).unwrap_or_default();
    format!(
        "Respond with a single JSON object and nothing else. The object must match this JSON schema:\n{}",
        schema
    )
}

/// 按字符硬截断，返回截断后的内容以及是否发生截断
pub fn excerpt(content: &str, max_chars: usize) -> (&str, bool) {
    match content.char_indices().nth(max_chars) {
        Some((byte_index, _)) => (&content[..byte_index], true),
        None => (content, false),
    }
}

/// 由仓库文件构建提示词
pub fn build_repository_prompt(files: &[RepositoryFile], language: TargetLanguage) -> String {
    build_repository_prompt_with_limit(files, language, DEFAULT_EXCERPT_CHARS)
}

/// 由仓库文件构建提示词，每个文件最多保留`max_chars`个字符
pub fn build_repository_prompt_with_limit(
    files: &[RepositoryFile],
    language: TargetLanguage,
    max_chars: usize,
) -> String {
    let mut prompt = String::from(REPOSITORY_RULES);
    prompt.push_str("\n\nRepository files:\n");

    for file in files {
        let (body, truncated) = excerpt(&file.content, max_chars);
        prompt.push('\n');
        prompt.push_str(FILE_HEADER);
        prompt.push_str(&file.path);
        prompt.push_str(FILE_HEADER_END);
        prompt.push('\n');
        prompt.push_str(body);
        if !body.ends_with('\n') {
            prompt.push('\n');
        }
        if truncated {
            prompt.push_str(TRUNCATED_MARKER);
            prompt.push('\n');
        }
        prompt.push_str(FILE_FOOTER);
        prompt.push('\n');
    }

    push_closing(&mut prompt, language);
    prompt
}

/// 由当前文档字段构建提示词
pub fn build_fields_prompt(document: &Document<'_>, language: TargetLanguage) -> String {
    let mut prompt = format!(
        "Generate a comprehensive README for a project with the following details:\nTitle: {}\nDescription: {}\n",
        document.title.trim(),
        document.description.trim()
    );

    let drafts: Vec<String> = document
        .sections
        .iter()
        .filter(|s| !s.content.trim().is_empty())
        .map(|s| format!("### {}\n{}", s.title, s.content.trim()))
        .collect();
    if !drafts.is_empty() {
        prompt.push_str("\nThe author has already drafted these sections; keep their facts:\n\n");
        prompt.push_str(&drafts.join("\n\n"));
        prompt.push('\n');
    }

    prompt.push_str("\nPlease provide content for all sections in a structured format.");
    push_closing(&mut prompt, language);
    prompt
}

fn push_closing(prompt: &mut String, language: TargetLanguage) {
    prompt.push_str("\n\n");
    prompt.push_str(&output_contract());
    prompt.push_str("\n\n");
    prompt.push_str(&language.prompt_instruction());
}
