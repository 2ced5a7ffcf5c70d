use crate::types::section::Section;

/// 文档快照
///
/// 每次渲染时由状态存储派生，只持有对章节的只读引用，从不单独保存。
#[derive(Debug, Clone, Default)]
pub struct Document<'a> {
    /// 项目标题
    pub title: &'a str,

    /// 项目描述
    pub description: &'a str,

    /// 按注册表顺序排列的已启用章节
    pub sections: Vec<&'a Section>,
}

impl<'a> Document<'a> {
    pub fn new(title: &'a str, description: &'a str, sections: Vec<&'a Section>) -> Self {
        Self {
            title,
            description,
            sections,
        }
    }
}
