//! 文档组装器 - 由标题、描述与已启用章节生成Markdown

use crate::types::document::Document;
use crate::types::section::{Section, SectionKey};

/// 标题为空时使用的默认标题
pub const DEFAULT_TITLE: &str = "Project Title";

/// 部分章节在输出中使用固定的标题，其余章节沿用注册表中的显示标题
pub fn heading_for(section: &Section) -> &str {
    match section.key {
        SectionKey::TechStack => "Tech Stack",
        SectionKey::ProjectStructure => "Project Structure",
        SectionKey::ApiReference => "API Reference",
        SectionKey::EnvironmentVariables => "Environment Variables",
        SectionKey::AuthorInfo => "Authors",
        _ => &section.title,
    }
}

/// 将文档渲染为Markdown字符串
///
/// 纯函数：相同输入总是得到相同输出，不会失败。标题始终输出，
/// 其余内容为空的部分不产生任何输出。
pub fn render(document: &Document<'_>) -> String {
    let title = document.title.trim();
    let title = if title.is_empty() { DEFAULT_TITLE } else { title };

    let mut markdown = format!("# {}\n\n", title);

    if !document.description.is_empty() {
        markdown.push_str(document.description);
        markdown.push_str("\n\n");
    }

    for section in &document.sections {
        // 标题与描述已在上面输出
        if !section.enabled || section.key == SectionKey::Title {
            continue;
        }
        let content = section.effective_content();
        if content.is_empty() {
            continue;
        }
        markdown.push_str(&format!("## {}\n\n{}\n\n", heading_for(section), content));
    }

    markdown
}

// Include tests
#[cfg(test)]
mod tests;
