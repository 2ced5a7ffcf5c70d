use crate::error::{ComposerError, Result};
use crate::generator::context::ComposerContext;
use std::fs;
use std::path::{Path, PathBuf};

/// 导出的Markdown文件名
pub const README_FILE: &str = "README.md";
/// 预览HTML文件名
pub const PREVIEW_FILE: &str = "README.html";

/// 保存文档
pub async fn save(context: &ComposerContext) -> Result<Vec<PathBuf>> {
    let outlet = DiskOutlet::new(&context.config.output_path, context.config.preview_html);
    outlet.save(context).await
}

pub trait Outlet {
    async fn save(&self, context: &ComposerContext) -> Result<Vec<PathBuf>>;
}

/// 将GFM Markdown渲染为HTML片段
pub fn render_preview_html(markdown: &str) -> Result<String> {
    markdown::to_html_with_options(markdown, &markdown::Options::gfm())
        .map_err(|e| ComposerError::Validation(format!("preview rendering failed: {}", e)))
}

/// 将HTML片段包装为可直接打开的页面
fn preview_page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

pub struct DiskOutlet {
    output_dir: PathBuf,
    with_preview: bool,
}

impl DiskOutlet {
    pub fn new(output_dir: impl AsRef<Path>, with_preview: bool) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            with_preview,
        }
    }
}

impl Outlet for DiskOutlet {
    async fn save(&self, context: &ComposerContext) -> Result<Vec<PathBuf>> {
        println!("\n🖊️ Saving README...");
        fs::create_dir_all(&self.output_dir)?;

        let (markdown, title) = {
            let store = context.store.read().await;
            (store.render(), store.title.clone())
        };

        let mut written = Vec::new();
        let readme_path = self.output_dir.join(README_FILE);
        fs::write(&readme_path, &markdown)?;
        println!("💾 Saved: {}", readme_path.display());
        written.push(readme_path);

        if self.with_preview {
            let body = render_preview_html(&markdown)?;
            let preview_path = self.output_dir.join(PREVIEW_FILE);
            fs::write(&preview_path, preview_page(title.trim(), &body))?;
            println!("💾 Saved preview: {}", preview_path.display());
            written.push(preview_path);
        }

        tracing::debug!(files = written.len(), dir = %self.output_dir.display(), "export finished");
        Ok(written)
    }
}

#[cfg(test)]
mod tests {
    use super::{DiskOutlet, Outlet, PREVIEW_FILE, README_FILE, render_preview_html};
    use crate::config::Config;
    use crate::generator::context::ComposerContext;
    use crate::registry::SectionRegistry;
    use crate::store::ComposerStore;
    use std::fs;
    use tempfile::TempDir;

    fn context() -> ComposerContext {
        let mut store = ComposerStore::new(SectionRegistry::new());
        store.set_title("Widget");
        store.set_description("Renders widgets.");
        ComposerContext::new(Config::default(), store)
    }

    #[tokio::test]
    async fn test_disk_outlet_writes_readme() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out");
        let context = context();

        let written = DiskOutlet::new(&output, false).save(&context).await.unwrap();

        assert_eq!(written, vec![output.join(README_FILE)]);
        let saved = fs::read_to_string(output.join(README_FILE)).unwrap();
        assert_eq!(saved, context.render().await);
        assert!(!output.join(PREVIEW_FILE).exists());
    }

    #[tokio::test]
    async fn test_disk_outlet_writes_preview_when_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let context = context();

        let written = DiskOutlet::new(temp_dir.path(), true)
            .save(&context)
            .await
            .unwrap();

        assert_eq!(written.len(), 2);
        let html = fs::read_to_string(temp_dir.path().join(PREVIEW_FILE)).unwrap();
        assert!(html.contains("<title>Widget</title>"));
        assert!(html.contains("<h1>Widget</h1>"));
        assert!(html.contains("<h2>Features</h2>"));
    }

    #[test]
    fn test_render_preview_html_supports_gfm_tables() {
        let html = render_preview_html("| a | b |\n| - | - |\n| 1 | 2 |\n").unwrap();
        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }
}
