use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{config::Config, store::ComposerStore};

#[derive(Clone)]
pub struct ComposerContext {
    /// 配置
    pub config: Config,
    /// 文档状态，唯一的写入者是当前流程
    pub store: Arc<RwLock<ComposerStore>>,
}

impl ComposerContext {
    pub fn new(config: Config, store: ComposerStore) -> Self {
        Self {
            config,
            store: Arc::new(RwLock::new(store)),
        }
    }

    /// 渲染当前文档
    pub async fn render(&self) -> String {
        let store = self.store.read().await;
        store.render()
    }
}
