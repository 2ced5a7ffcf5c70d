use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

use crate::config::GitHubConfig;
use crate::error::{ComposerError, Result};
use crate::github::{EntryKind, RepositoryRef, SourceHost, TreeEntry};

/// git trees API 的响应
#[derive(Debug, Deserialize)]
pub(crate) struct TreeResponse {
    #[serde(default)]
    pub tree: Vec<RawTreeEntry>,
    #[serde(default)]
    pub truncated: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawTreeEntry {
    pub path: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// GitHub 公共仓库客户端（只读，不做鉴权）
#[derive(Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    api_base_url: String,
    raw_base_url: reqwest::Url,
}

impl GitHubClient {
    pub fn new(config: &GitHubConfig, timeout_seconds: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("readme-composer/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;
        let raw_base_url = reqwest::Url::parse(&config.raw_base_url).map_err(|e| {
            ComposerError::Validation(format!("invalid raw_base_url {}: {}", config.raw_base_url, e))
        })?;
        if raw_base_url.cannot_be_a_base() {
            return Err(ComposerError::Validation(format!(
                "invalid raw_base_url {}",
                config.raw_base_url
            )));
        }
        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            raw_base_url,
        })
    }

    fn tree_url(&self, repo: &RepositoryRef) -> String {
        format!(
            "{}/repos/{}/{}/git/trees/{}?recursive=1",
            self.api_base_url, repo.owner, repo.repo, repo.branch
        )
    }

    /// 原始内容地址，路径的每一段都经过百分号编码
    fn raw_url(&self, repo: &RepositoryRef, path: &str) -> String {
        let mut url = self.raw_base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(&repo.owner)
                .push(&repo.repo)
                .extend(repo.branch.split('/'))
                .extend(path.split('/'));
        }
        url.to_string()
    }

    /// 将API返回的条目转换为带下载地址的条目
    pub(crate) fn entries_from(&self, repo: &RepositoryRef, response: TreeResponse) -> Vec<TreeEntry> {
        if response.truncated {
            tracing::warn!(repository = %repo, "repository tree listing was truncated by the host");
        }
        response
            .tree
            .into_iter()
            .map(|raw| TreeEntry {
                url: self.raw_url(repo, &raw.path),
                path: raw.path,
                kind: raw.kind,
            })
            .collect()
    }
}

#[async_trait]
impl SourceHost for GitHubClient {
    async fn fetch_tree(&self, repo: &RepositoryRef) -> Result<Vec<TreeEntry>> {
        let url = self.tree_url(repo);
        tracing::debug!(%url, "fetching repository tree");
        let response: TreeResponse = self
            .http
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(self.entries_from(repo, response))
    }

    async fn fetch_file(&self, url: &str) -> Result<String> {
        tracing::debug!(%url, "fetching file");
        let content = self
            .http
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(content)
    }
}
