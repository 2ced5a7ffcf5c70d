//! AI响应解析 - 将模型返回的文本拆分为文档字段
//!
//! 解析是尽力而为的：只合并模型确实写出的内容，模型没有提到的字段保持为空，
//! 调用方不应假设每个字段都会被填充。

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::LazyLock;

use crate::assembler::DEFAULT_TITLE;
use crate::types::section::SectionKey;

/// 无法识别标题与描述时，从原始文本截取作为描述的字符数
pub const FALLBACK_DESCRIPTION_CHARS: usize = 200;

/// 模型填充的字段
///
/// 同时也是提示词中要求模型返回的JSON结构。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiFields {
    /// Project name, plain text without Markdown
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// One or two sentences describing what the project does and who it is for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Markdown bullet list of the main features
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<String>,

    /// Markdown list of languages, frameworks and services used
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,

    /// Markdown installation steps with commands in fenced code blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub installation: Option<String>,

    /// Markdown usage instructions and examples
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,
}

impl AiFields {
    /// 可映射到章节的字段，按章节顺序排列
    pub fn sections(&self) -> Vec<(SectionKey, &str)> {
        [
            (SectionKey::Features, &self.features),
            (SectionKey::TechStack, &self.tech_stack),
            (SectionKey::Installation, &self.installation),
            (SectionKey::Usage, &self.usage),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.as_deref().map(|v| (key, v)))
        .collect()
    }

    /// 已填充的字段数
    pub fn populated(&self) -> usize {
        usize::from(self.title.is_some())
            + usize::from(self.description.is_some())
            + self.sections().len()
    }

    pub fn is_empty(&self) -> bool {
        self.populated() == 0
    }

    fn slot_mut(&mut self, key: &SectionKey) -> Option<&mut Option<String>> {
        match key {
            SectionKey::Features => Some(&mut self.features),
            SectionKey::TechStack => Some(&mut self.tech_stack),
            SectionKey::Installation => Some(&mut self.installation),
            SectionKey::Usage => Some(&mut self.usage),
            _ => None,
        }
    }
}

/// 解析模型响应
///
/// 整段响应是JSON时按字段解析；否则按Markdown标题逐行切分，只有正文既没有标题
/// 也没有可识别的章节时，才采用夹在文字或代码块中的JSON。仍拿不到标题和描述时，
/// 标题使用`fallback_title`或默认标题；若也没有切分出章节，截取正文开头作为描述。
pub fn parse_response(raw: &str, fallback_title: Option<&str>) -> AiFields {
    let trimmed = raw.trim();
    if let Some(fields) = object_fields(trimmed, 1) {
        return fields;
    }

    let mut fields = parse_markdown(raw);
    let has_sections = !fields.sections().is_empty();
    // README正文里的JSON只是示例代码
    if fields.title.is_none()
        && !has_sections
        && let Some(structured) = embedded_fields(trimmed)
    {
        return structured;
    }

    if fields.title.is_none() && fields.description.is_none() {
        let title = fallback_title
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TITLE);
        fields.title = Some(title.to_string());
        if !has_sections {
            fields.description = non_empty(truncate_with_ellipsis(
                &strip_headings(trimmed),
                FALLBACK_DESCRIPTION_CHARS,
            ));
        }
    }
    fields
}

static FENCED_JSON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:json|JSON)?\s*(\{.*\})\s*```").expect("valid fenced json regex")
});

/// 在文字或代码块中查找JSON对象，至少要识别出两个字段
fn embedded_fields(trimmed: &str) -> Option<AiFields> {
    let fenced = FENCED_JSON
        .captures(trimmed)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str());
    let embedded = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if start < end => Some(&trimmed[start..=end]),
        _ => None,
    };

    [fenced, embedded]
        .into_iter()
        .flatten()
        .find_map(|candidate| object_fields(candidate, 2))
}

/// 去掉标题行，避免回退描述中出现Markdown标题
fn strip_headings(text: &str) -> String {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n")
        .trim()
        .to_string()
}

fn object_fields(candidate: &str, min_fields: usize) -> Option<AiFields> {
    let Ok(Value::Object(map)) = serde_json::from_str::<Value>(candidate) else {
        return None;
    };
    let fields = fields_from_object(&map);
    (fields.populated() >= min_fields).then_some(fields)
}

fn fields_from_object(map: &Map<String, Value>) -> AiFields {
    let lookup = |names: &[&str]| {
        names
            .iter()
            .find_map(|name| map.get(*name))
            .and_then(value_to_text)
    };

    AiFields {
        title: lookup(&["title", "name"]),
        description: lookup(&["description", "summary"]),
        features: lookup(&["features"]),
        tech_stack: lookup(&["techStack", "tech_stack", "technologies"]),
        installation: lookup(&["installation", "install"]),
        usage: lookup(&["usage"]),
    }
}

/// 将JSON值转换为Markdown文本：字符串原样保留，数组转为列表
fn value_to_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Array(items) => items
            .iter()
            .filter_map(value_to_text)
            .map(|item| {
                if item.starts_with("- ") || item.starts_with("* ") {
                    item
                } else {
                    format!("- {}", item)
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        Value::Null => String::new(),
        Value::Object(map) => map
            .iter()
            .filter_map(|(k, v)| value_to_text(v).map(|v| format!("**{}:** {}", k, v)))
            .collect::<Vec<_>>()
            .join("\n\n"),
        other => other.to_string(),
    };
    non_empty(text)
}

/// Markdown解析的目标字段
#[derive(Debug, Clone, PartialEq)]
enum Target {
    Description,
    Section(SectionKey),
}

fn parse_markdown(raw: &str) -> AiFields {
    let mut fields = AiFields::default();
    let mut collected: Vec<(Target, Vec<&str>)> = Vec::new();
    let mut current: Option<usize> = None;
    let mut section_started = false;
    let mut in_fence = false;

    for line in raw.lines() {
        let trimmed = line.trim();

        if trimmed.starts_with("```") || trimmed.starts_with("~~~") {
            in_fence = !in_fence;
            if let Some(index) = current {
                collected[index].1.push(line);
            }
            continue;
        }

        if !in_fence {
            if let Some(text) = heading_text(trimmed, 1) {
                if fields.title.is_none() {
                    fields.title = non_empty(text.to_string());
                } else if let Some(index) = current {
                    collected[index].1.push(line);
                }
                continue;
            }

            if let Some(text) = heading_text(trimmed, 2) {
                section_started = true;
                current = classify_heading(text).map(|target| {
                    match collected.iter().position(|(t, _)| *t == target) {
                        Some(index) => index,
                        None => {
                            collected.push((target, Vec::new()));
                            collected.len() - 1
                        }
                    }
                });
                continue;
            }
        }

        if let Some(index) = current {
            collected[index].1.push(line);
            continue;
        }

        if !in_fence
            && !section_started
            && fields.description.is_none()
            && !trimmed.is_empty()
            && !trimmed.starts_with('#')
        {
            fields.description = Some(trimmed.to_string());
        }
    }

    for (target, lines) in collected {
        let Some(text) = non_empty(lines.join("\n").trim().to_string()) else {
            continue;
        };
        match target {
            Target::Description => {
                if fields.description.is_none() {
                    fields.description = Some(text);
                }
            }
            Target::Section(key) => {
                if let Some(slot) = fields.slot_mut(&key) {
                    *slot = Some(text);
                }
            }
        }
    }

    fields
}

/// 若该行是指定级别的ATX标题，返回标题文本
fn heading_text(line: &str, level: usize) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes != level {
        return None;
    }
    let rest = &line[level..];
    if !rest.is_empty() && !rest.starts_with(' ') && !rest.starts_with('\t') {
        return None;
    }
    Some(rest.trim().trim_end_matches('#').trim())
}

/// 根据二级标题文本判断其对应的字段
fn classify_heading(text: &str) -> Option<Target> {
    let normalized: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect::<String>()
        .to_lowercase();
    let normalized = normalized.trim();

    if normalized.contains("feature") {
        Some(Target::Section(SectionKey::Features))
    } else if normalized.contains("tech stack")
        || normalized.contains("technolog")
        || normalized.contains("built with")
    {
        Some(Target::Section(SectionKey::TechStack))
    } else if normalized.contains("install")
        || normalized.contains("getting started")
        || normalized == "setup"
    {
        Some(Target::Section(SectionKey::Installation))
    } else if normalized.contains("usage") || normalized.contains("how to use") {
        Some(Target::Section(SectionKey::Usage))
    } else if matches!(normalized, "description" | "about" | "overview") {
        Some(Target::Description)
    } else {
        None
    }
}

/// 按字符截断，被截断时追加省略号
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
        None => text.to_string(),
    }
}

fn non_empty(text: String) -> Option<String> {
    if text.trim().is_empty() { None } else { Some(text) }
}
