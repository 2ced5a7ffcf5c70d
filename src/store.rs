//! 组合器状态存储 - 持有文档的全部可编辑状态

use crate::error::{ComposerError, Result};
use crate::i18n::TargetLanguage;
use crate::registry::SectionRegistry;
use crate::types::document::Document;

/// 组合器状态
///
/// 唯一的写入者持有该对象；渲染时通过[`ComposerStore::snapshot`]取得只读快照。
#[derive(Debug, Clone, Default)]
pub struct ComposerStore {
    pub title: String,
    pub description: String,
    pub registry: SectionRegistry,
    pub language: TargetLanguage,
    generating: bool,
}

impl ComposerStore {
    pub fn new(registry: SectionRegistry) -> Self {
        Self {
            registry,
            ..Default::default()
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// 生成当前文档的只读快照
    pub fn snapshot(&self) -> Document<'_> {
        Document::new(
            &self.title,
            &self.description,
            self.registry.enabled_sections().collect(),
        )
    }

    /// 渲染当前文档
    pub fn render(&self) -> String {
        crate::assembler::render(&self.snapshot())
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    /// 标记生成开始，已有生成进行中时拒绝重复提交
    pub(crate) fn begin_generation(&mut self) -> Result<()> {
        if self.generating {
            return Err(ComposerError::GenerationInProgress);
        }
        self.generating = true;
        Ok(())
    }

    pub(crate) fn end_generation(&mut self) {
        self.generating = false;
    }
}
