//! 代码仓库读取 - 列出仓库文件、按白名单挑选并并发拉取内容

use async_trait::async_trait;
use futures::future::join_all;
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

use crate::error::{ComposerError, Result};

mod client;

pub use client::GitHubClient;

/// 仓库定位信息
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryRef {
    pub owner: String,
    pub repo: String,
    pub branch: String,
}

static GITHUB_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:https?://)?(?:www\.)?github\.com/([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+?)(?:\.git)?(?:/tree/([^\s?#]+?))?/?$",
    )
    .expect("valid repository url regex")
});

static SHORTHAND: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z0-9_.-]+)/([A-Za-z0-9_.-]+)$").expect("valid shorthand regex")
});

impl RepositoryRef {
    /// 解析仓库地址，支持完整URL、`github.com/o/r`、`o/r`以及`/tree/<branch>`后缀
    pub fn parse(url: &str, default_branch: &str) -> Result<Self> {
        let url = url.trim();
        let captures = GITHUB_URL
            .captures(url)
            .or_else(|| SHORTHAND.captures(url))
            .ok_or_else(|| ComposerError::Network(format!("malformed repository URL: {}", url)))?;

        let owner = captures[1].to_string();
        let repo = captures[2].trim_end_matches(".git").to_string();
        if repo.is_empty() {
            return Err(ComposerError::Network(format!(
                "malformed repository URL: {}",
                url
            )));
        }
        let branch = captures
            .get(3)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| default_branch.to_string());

        Ok(Self {
            owner,
            repo,
            branch,
        })
    }
}

impl std::fmt::Display for RepositoryRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}@{}", self.owner, self.repo, self.branch)
    }
}

/// 仓库文件树中的条目类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Blob,
    Tree,
    Commit,
}

/// 仓库文件树中的一个条目
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    pub path: String,
    /// 获取原始内容的地址
    pub url: String,
    pub kind: EntryKind,
}

/// 拉取到的仓库文件
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryFile {
    pub path: String,
    pub content: String,
}

/// 代码托管服务
#[async_trait]
pub trait SourceHost: Send + Sync {
    /// 列出仓库的全部条目（扁平列表）
    async fn fetch_tree(&self, repo: &RepositoryRef) -> Result<Vec<TreeEntry>>;

    /// 获取文件的原始内容
    async fn fetch_file(&self, url: &str) -> Result<String>;
}

/// 包管理清单与锁文件
const MANIFEST_PATTERNS: &[&str] = &[
    "package.json",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "Cargo.toml",
    "Cargo.lock",
    "pyproject.toml",
    "poetry.lock",
    "requirements*.txt",
    "setup.py",
    "go.mod",
    "go.sum",
    "pom.xml",
    "build.gradle*",
    "Gemfile",
    "Gemfile.lock",
    "composer.json",
    "*.csproj",
];

/// 常见的工程配置文件
const CONFIG_PATTERNS: &[&str] = &[
    "tsconfig*.json",
    "vite.config.*",
    "webpack.config.*",
    "next.config.*",
    "tailwind.config.*",
    "Dockerfile",
    "docker-compose*.yml",
    "docker-compose*.yaml",
    ".env.example",
    "Makefile",
];

/// 约定俗成的源码目录
const SOURCE_DIRS: &[&str] = &["src", "lib", "app", "components", "pages"];

static FILE_PATTERNS: LazyLock<Vec<Pattern>> = LazyLock::new(|| {
    MANIFEST_PATTERNS
        .iter()
        .chain(CONFIG_PATTERNS.iter())
        .filter_map(|p| Pattern::new(p).ok())
        .collect()
});

/// 白名单优先级：清单与配置文件优先，其次是源码目录中的文件
fn allow_list_rank(path: &str) -> Option<u8> {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    if FILE_PATTERNS.iter().any(|p| p.matches(file_name)) {
        return Some(0);
    }
    let in_source_dir = path
        .split('/')
        .rev()
        .skip(1)
        .any(|dir| SOURCE_DIRS.contains(&dir));
    if in_source_dir {
        return Some(1);
    }
    None
}

/// 判断路径是否在白名单中
pub fn is_allowed(path: &str) -> bool {
    allow_list_rank(path).is_some()
}

/// 挑选需要拉取的文件：只保留文件条目，按白名单过滤，并截断到`max_files`个
pub fn select_files(entries: &[TreeEntry], max_files: usize) -> Vec<&TreeEntry> {
    let mut ranked: Vec<(u8, &TreeEntry)> = entries
        .iter()
        .filter(|entry| entry.kind == EntryKind::Blob)
        .filter_map(|entry| allow_list_rank(&entry.path).map(|rank| (rank, entry)))
        .collect();
    // 稳定排序，同一优先级内保持仓库顺序
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked
        .into_iter()
        .take(max_files)
        .map(|(_, entry)| entry)
        .collect()
}

/// 单个文件拉取失败时写入提示词的占位内容
pub fn placeholder_content(path: &str) -> String {
    format!("[content of {} could not be fetched]", path)
}

/// 先拉取文件树，再并发拉取选中的文件
///
/// 文件树拉取失败时整体失败；单个文件失败时用占位内容代替。
pub async fn fetch_repository_files(
    host: &dyn SourceHost,
    repo: &RepositoryRef,
    max_files: usize,
) -> Result<Vec<RepositoryFile>> {
    let entries = host.fetch_tree(repo).await?;
    let selected = select_files(&entries, max_files);
    tracing::info!(
        repository = %repo,
        total = entries.len(),
        selected = selected.len(),
        "repository tree fetched"
    );

    let fetches = selected.into_iter().map(|entry| async move {
        let content = match host.fetch_file(&entry.url).await {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(path = %entry.path, error = %err, "file fetch failed, using placeholder");
                placeholder_content(&entry.path)
            }
        };
        RepositoryFile {
            path: entry.path.clone(),
            content,
        }
    });

    Ok(join_all(fetches).await)
}

// Include tests
#[cfg(test)]
mod tests;
