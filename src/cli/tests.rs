#[cfg(test)]
mod tests {
    use crate::cli::Args;
    use crate::config::{Config, LLMProvider};
    use crate::i18n::TargetLanguage;
    use clap::Parser;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::NamedTempFile;

    #[test]
    fn test_args_default_values() {
        let args = Args::try_parse_from(["readme-composer"]).unwrap();

        assert!(args.config.is_none());
        assert!(args.output_path.is_none());
        assert!(args.enable.is_empty());
        assert!(args.add_section.is_empty());
        assert!(!args.html);
        assert!(!args.stdout);
        assert!(!args.verbose);
    }

    #[test]
    fn test_args_short_options() {
        let args = Args::try_parse_from([
            "readme-composer",
            "-o",
            "/tmp/out",
            "-t",
            "Widget",
            "-d",
            "Renders widgets.",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.output_path, Some(PathBuf::from("/tmp/out")));
        assert_eq!(args.title.as_deref(), Some("Widget"));
        assert_eq!(args.description.as_deref(), Some("Renders widgets."));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_repeated_section_flags() {
        let args = Args::try_parse_from([
            "readme-composer",
            "--enable",
            "faq",
            "--enable",
            "roadmap",
            "--disable",
            "badges",
            "--add-section",
            "Known Issues",
        ])
        .unwrap();

        assert_eq!(args.enable, vec!["faq", "roadmap"]);
        assert_eq!(args.disable, vec!["badges"]);
        assert_eq!(args.add_section, vec!["Known Issues"]);
    }

    #[test]
    fn test_apply_overrides_config() {
        let args = Args::try_parse_from([
            "readme-composer",
            "-t",
            "Widget",
            "--ai-model",
            "claude",
            "--api-key",
            "sk-test",
            "--repo",
            "octo/widget",
            "--branch",
            "dev",
            "--language",
            "ja",
            "--html",
            "--stdout",
        ])
        .unwrap();

        let mut config = Config::default();
        config.document.enable = vec!["faq".to_string()];
        args.apply_to(&mut config).unwrap();

        assert_eq!(config.document.title, "Widget");
        assert_eq!(config.llm.model_variant.as_deref(), Some("claude"));
        assert_eq!(config.llm.api_key, "sk-test");
        assert_eq!(
            config.llm.resolve_model().unwrap().provider,
            LLMProvider::Anthropic
        );
        assert_eq!(config.github.repository.as_deref(), Some("octo/widget"));
        assert_eq!(config.github.branch, "dev");
        assert_eq!(config.target_language, TargetLanguage::Japanese);
        assert!(config.preview_html);
        assert!(config.print_to_stdout);
        // 命令行追加而不是替换配置文件中的章节
        assert_eq!(config.document.enable, vec!["faq"]);
    }

    #[test]
    fn test_apply_rejects_unsupported_model() {
        let args = Args::try_parse_from(["readme-composer", "--ai-model", "bard"]).unwrap();
        let mut config = Config::default();

        assert!(args.apply_to(&mut config).is_err());
    }

    #[test]
    fn test_apply_keeps_language_on_unknown_code() {
        let args = Args::try_parse_from(["readme-composer", "--language", "xx"]).unwrap();
        let mut config = Config::default();
        config.target_language = TargetLanguage::German;

        args.apply_to(&mut config).unwrap();
        assert_eq!(config.target_language, TargetLanguage::German);
    }

    #[test]
    fn test_into_config_reads_explicit_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "preview_html = true\n\n[document]\ntitle = \"From File\"\n\n[github]\nbranch = \"trunk\""
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let args = Args::try_parse_from(["readme-composer", "-c", &path, "-d", "From CLI"]).unwrap();
        let config = args.into_config().unwrap();

        assert!(config.preview_html);
        assert_eq!(config.document.title, "From File");
        assert_eq!(config.document.description, "From CLI");
        assert_eq!(config.github.branch, "trunk");
    }

    #[test]
    fn test_into_config_fails_on_missing_file() {
        let args =
            Args::try_parse_from(["readme-composer", "-c", "/nonexistent/readme-composer.toml"])
                .unwrap();
        assert!(args.into_config().is_err());
    }
}
