//! 章节注册表 - 维护文档章节的有序集合

use crate::error::{ComposerError, Result};
use crate::types::section::{Section, SectionKey};

/// 章节注册表
///
/// 顺序即插入顺序：内置章节在前，自定义章节追加在后。章节键在注册表内唯一。
#[derive(Debug, Clone)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl Default for SectionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionRegistry {
    /// 使用内置的默认章节集合创建注册表
    pub fn new() -> Self {
        let sections = SectionKey::BUILTIN
            .iter()
            .cloned()
            .map(Section::builtin)
            .collect();
        Self { sections }
    }

    /// 创建空注册表
    pub fn empty() -> Self {
        Self {
            sections: Vec::new(),
        }
    }

    /// 按插入顺序列出所有章节
    pub fn list_sections(&self) -> &[Section] {
        &self.sections
    }

    /// 按顺序迭代已启用的章节
    pub fn enabled_sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(|section| section.enabled)
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Section> {
        let key = key.as_ref();
        self.sections.iter().find(|s| s.key.as_str() == key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.key.as_str() == key)
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.get(key).is_some()
    }

    /// 启用或禁用章节，键不存在时不做任何事并返回`false`
    pub fn set_enabled(&mut self, key: impl AsRef<str>, enabled: bool) -> bool {
        let key = key.as_ref();
        match self.get_mut(key) {
            Some(section) => {
                section.enabled = enabled;
                true
            }
            None => {
                tracing::debug!(key, enabled, "ignoring toggle of unknown section");
                false
            }
        }
    }

    /// 替换已有章节的内容，不会创建新章节
    pub fn update_content(&mut self, key: impl AsRef<str>, text: impl Into<String>) -> Result<()> {
        let key = key.as_ref();
        let section = self
            .get_mut(key)
            .ok_or_else(|| ComposerError::UnknownSection(key.to_string()))?;
        section.content = text.into();
        Ok(())
    }

    /// 添加自定义章节，返回派生出的章节键
    pub fn add_custom_section(&mut self, display_name: &str) -> Result<SectionKey> {
        let display_name = display_name.trim();
        if display_name.is_empty() {
            return Err(ComposerError::Validation(
                "custom section name must not be empty".to_string(),
            ));
        }

        let derived = derive_key(display_name);
        if self.contains(&derived) {
            return Err(ComposerError::DuplicateKey(derived));
        }

        let key = SectionKey::Custom(derived);
        let template = format!("### {}", display_name);
        self.sections
            .push(Section::new(key.clone(), display_name, true, template));
        tracing::debug!(key = %key, "custom section added");
        Ok(key)
    }

    /// 将章节内容恢复为模板文本，键不存在时不做任何事并返回`false`
    pub fn reset_content(&mut self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        match self.get_mut(key) {
            Some(section) => {
                section.content = section.template.clone();
                true
            }
            None => {
                tracing::debug!(key, "ignoring reset of unknown section");
                false
            }
        }
    }

    /// 从输出中移除章节：只禁用，内容与模板仍可访问
    pub fn remove_section(&mut self, key: impl AsRef<str>) -> bool {
        self.set_enabled(key, false)
    }

    /// 真正删除章节，返回被删除的章节
    pub fn delete_section(&mut self, key: impl AsRef<str>) -> Option<Section> {
        let key = key.as_ref();
        let index = self.sections.iter().position(|s| s.key.as_str() == key);
        match index {
            Some(index) => Some(self.sections.remove(index)),
            None => {
                tracing::debug!(key, "ignoring delete of unknown section");
                None
            }
        }
    }
}

/// 由显示名称派生章节键：转小写并去除所有空白
pub fn derive_key(display_name: &str) -> String {
    display_name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
