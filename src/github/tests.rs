#[cfg(test)]
mod tests {
    use crate::config::GitHubConfig;
    use crate::error::{ComposerError, Result};
    use crate::github::client::TreeResponse;
    use crate::github::{
        EntryKind, GitHubClient, RepositoryRef, SourceHost, TreeEntry, fetch_repository_files,
        is_allowed, placeholder_content, select_files,
    };
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn blob(path: &str) -> TreeEntry {
        TreeEntry {
            path: path.to_string(),
            url: format!("mem://{}", path),
            kind: EntryKind::Blob,
        }
    }

    struct MemoryHost {
        entries: Vec<TreeEntry>,
        files: HashMap<String, String>,
        file_calls: AtomicUsize,
        fail_tree: bool,
    }

    impl MemoryHost {
        fn new(entries: Vec<TreeEntry>, files: &[(&str, &str)]) -> Self {
            Self {
                entries,
                files: files
                    .iter()
                    .map(|(p, c)| (format!("mem://{}", p), c.to_string()))
                    .collect(),
                file_calls: AtomicUsize::new(0),
                fail_tree: false,
            }
        }
    }

    #[async_trait]
    impl SourceHost for MemoryHost {
        async fn fetch_tree(&self, _repo: &RepositoryRef) -> Result<Vec<TreeEntry>> {
            if self.fail_tree {
                return Err(ComposerError::Network("HTTP 404 Not Found".to_string()));
            }
            Ok(self.entries.clone())
        }

        async fn fetch_file(&self, url: &str) -> Result<String> {
            self.file_calls.fetch_add(1, Ordering::SeqCst);
            self.files
                .get(url)
                .cloned()
                .ok_or_else(|| ComposerError::Network(format!("HTTP 500 for {}", url)))
        }
    }

    fn repo() -> RepositoryRef {
        RepositoryRef::parse("octo/widget", "main").unwrap()
    }

    #[test]
    fn test_parse_full_url() {
        let repo = RepositoryRef::parse("https://github.com/tokio-rs/axum", "main").unwrap();
        assert_eq!(repo.owner, "tokio-rs");
        assert_eq!(repo.repo, "axum");
        assert_eq!(repo.branch, "main");
    }

    #[test]
    fn test_parse_url_variants() {
        let repo = RepositoryRef::parse("github.com/serde-rs/serde.git", "main").unwrap();
        assert_eq!(repo.repo, "serde");

        let repo = RepositoryRef::parse("https://www.github.com/rust-lang/log/", "main").unwrap();
        assert_eq!(repo.owner, "rust-lang");
        assert_eq!(repo.repo, "log");

        let repo =
            RepositoryRef::parse("https://github.com/rust-lang/rust/tree/beta", "main").unwrap();
        assert_eq!(repo.branch, "beta");

        let repo = RepositoryRef::parse("  octo/widget  ", "develop").unwrap();
        assert_eq!(repo.owner, "octo");
        assert_eq!(repo.branch, "develop");
        assert_eq!(repo.to_string(), "octo/widget@develop");
    }

    #[test]
    fn test_parse_malformed_url_is_network_error() {
        for bad in ["", "https://gitlab.com/a/b", "not a url", "https://github.com/only-owner"] {
            let result = RepositoryRef::parse(bad, "main");
            assert!(
                matches!(result, Err(ComposerError::Network(_))),
                "expected failure for {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_allow_list() {
        assert!(is_allowed("package.json"));
        assert!(is_allowed("Cargo.toml"));
        assert!(is_allowed("backend/requirements-dev.txt"));
        assert!(is_allowed("yarn.lock"));
        assert!(is_allowed("tsconfig.node.json"));
        assert!(is_allowed("vite.config.ts"));
        assert!(is_allowed("src/main.rs"));
        assert!(is_allowed("web/src/components/Button.tsx"));
        assert!(is_allowed("app/models/user.rb"));

        assert!(!is_allowed("README.md"));
        assert!(!is_allowed("docs/guide.md"));
        assert!(!is_allowed("assets/logo.png"));
        assert!(!is_allowed("src"));
    }

    #[test]
    fn test_select_files_filters_blobs_and_prioritizes_manifests() {
        let mut tree_dir = blob("src");
        tree_dir.kind = EntryKind::Tree;
        let entries = vec![
            blob("src/lib.rs"),
            tree_dir,
            blob("README.md"),
            blob("Cargo.toml"),
            blob("src/main.rs"),
        ];

        let selected: Vec<&str> = select_files(&entries, 15)
            .into_iter()
            .map(|e| e.path.as_str())
            .collect();
        assert_eq!(selected, vec!["Cargo.toml", "src/lib.rs", "src/main.rs"]);
    }

    #[test]
    fn test_select_files_caps_at_limit() {
        let entries: Vec<TreeEntry> = (0..40).map(|i| blob(&format!("src/file{}.rs", i))).collect();

        let selected = select_files(&entries, 15);
        assert_eq!(selected.len(), 15);
        assert_eq!(selected[0].path, "src/file0.rs");
        assert_eq!(selected[14].path, "src/file14.rs");
    }

    #[test]
    fn test_tree_response_into_entries() {
        let json = r#"{
            "sha": "abc",
            "tree": [
                {"path": "Cargo.toml", "mode": "100644", "type": "blob", "sha": "1", "size": 10, "url": "x"},
                {"path": "src", "mode": "040000", "type": "tree", "sha": "2", "url": "y"}
            ],
            "truncated": false
        }"#;
        let response: TreeResponse = serde_json::from_str(json).unwrap();
        let client = GitHubClient::new(&GitHubConfig::default(), 5).unwrap();
        let entries = client.entries_from(&repo(), response);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].kind, EntryKind::Blob);
        assert_eq!(
            entries[0].url,
            "https://raw.githubusercontent.com/octo/widget/main/Cargo.toml"
        );
        assert_eq!(entries[1].kind, EntryKind::Tree);
    }

    #[test]
    fn test_raw_urls_encode_path_segments() {
        let response: TreeResponse = serde_json::from_str(
            r#"{"tree": [{"path": "docs/my notes#1?.md", "type": "blob"}]}"#,
        )
        .unwrap();
        let client = GitHubClient::new(&GitHubConfig::default(), 5).unwrap();
        let feature_branch = RepositoryRef::parse("octo/widget", "feature/x").unwrap();
        let entries = client.entries_from(&feature_branch, response);

        assert_eq!(entries[0].path, "docs/my notes#1?.md");
        assert_eq!(
            entries[0].url,
            "https://raw.githubusercontent.com/octo/widget/feature/x/docs/my%20notes%231%3F.md"
        );
    }

    #[test]
    fn test_client_rejects_invalid_raw_base_url() {
        let config = GitHubConfig {
            raw_base_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            GitHubClient::new(&config, 5),
            Err(ComposerError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_repository_files_uses_placeholder_on_failure() {
        let host = MemoryHost::new(
            vec![blob("package.json"), blob("src/index.ts"), blob("logo.svg")],
            &[("package.json", "{\"name\": \"widget\"}")],
        );

        let files = fetch_repository_files(&host, &repo(), 15).await.unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].path, "package.json");
        assert_eq!(files[0].content, "{\"name\": \"widget\"}");
        assert_eq!(files[1].path, "src/index.ts");
        assert_eq!(files[1].content, placeholder_content("src/index.ts"));
        assert_eq!(host.file_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_fetch_repository_files_respects_cap() {
        let entries: Vec<TreeEntry> = (0..20).map(|i| blob(&format!("lib/m{}.py", i))).collect();
        let host = MemoryHost::new(entries, &[]);

        let files = fetch_repository_files(&host, &repo(), 15).await.unwrap();
        assert_eq!(files.len(), 15);
        assert_eq!(host.file_calls.load(Ordering::SeqCst), 15);
    }

    #[tokio::test]
    async fn test_fetch_repository_files_tree_failure_aborts() {
        let mut host = MemoryHost::new(vec![blob("Cargo.toml")], &[]);
        host.fail_tree = true;

        let result = fetch_repository_files(&host, &repo(), 15).await;
        assert!(matches!(result, Err(ComposerError::Network(_))));
        assert_eq!(host.file_calls.load(Ordering::SeqCst), 0);
    }
}
