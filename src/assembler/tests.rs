#[cfg(test)]
mod tests {
    use crate::assembler::{DEFAULT_TITLE, heading_for, render};
    use crate::registry::SectionRegistry;
    use crate::store::ComposerStore;
    use crate::types::document::Document;
    use crate::types::section::{Section, SectionKey, templates};

    fn count_h2(markdown: &str) -> usize {
        markdown.lines().filter(|l| l.starts_with("## ")).count()
    }

    #[test]
    fn test_render_widget_scenario() {
        let features = Section::builtin(SectionKey::Features).with_content("- fast");
        let document = Document::new("Widget", "A thing", vec![&features]);

        assert_eq!(
            render(&document),
            "# Widget\n\nA thing\n\n## Features\n\n- fast\n\n"
        );
    }

    #[test]
    fn test_render_empty_document_only_default_title() {
        let document = Document::new("", "", vec![]);

        assert_eq!(render(&document), format!("# {}\n\n", DEFAULT_TITLE));
    }

    #[test]
    fn test_render_trims_title_and_defaults_blank_title() {
        let document = Document::new("  Spaced  ", "", vec![]);
        assert_eq!(render(&document), "# Spaced\n\n");

        let document = Document::new("   ", "", vec![]);
        assert_eq!(render(&document), "# Project Title\n\n");
    }

    #[test]
    fn test_render_skips_title_section_and_empty_content() {
        let title = Section::builtin(SectionKey::Title).with_content("ignored");
        let empty = Section::new(SectionKey::Custom("blank".into()), "Blank", true, "");
        let usage = Section::builtin(SectionKey::Usage).with_content("run it");
        let document = Document::new("X", "", vec![&title, &empty, &usage]);

        assert_eq!(render(&document), "# X\n\n## Usage\n\nrun it\n\n");
    }

    #[test]
    fn test_render_falls_back_to_template() {
        let license = Section::builtin(SectionKey::License);
        let document = Document::new("X", "", vec![&license]);

        assert_eq!(render(&document), "# X\n\n## License\n\nMIT\n\n");
    }

    #[test]
    fn test_heading_override_table() {
        let cases = [
            (SectionKey::TechStack, "Tech Stack"),
            (SectionKey::ProjectStructure, "Project Structure"),
            (SectionKey::ApiReference, "API Reference"),
            (SectionKey::EnvironmentVariables, "Environment Variables"),
            (SectionKey::AuthorInfo, "Authors"),
            (SectionKey::Features, "Features"),
            (SectionKey::Faq, "FAQ"),
        ];
        for (key, expected) in cases {
            assert_eq!(heading_for(&Section::builtin(key)), expected);
        }

        let custom = Section::new(SectionKey::Custom("mynotes".into()), "📝 My Notes", true, "x");
        assert_eq!(heading_for(&custom), "📝 My Notes");
    }

    #[test]
    fn test_one_heading_per_enabled_section_in_order() {
        let mut store = ComposerStore::new(SectionRegistry::new());
        store.set_title("Demo");
        store.registry.set_enabled(SectionKey::Faq, true);
        store.registry.set_enabled(SectionKey::Badges, false);

        let markdown = store.render();
        let expected: Vec<String> = store
            .registry
            .enabled_sections()
            .filter(|s| s.key != SectionKey::Title && !s.effective_content().is_empty())
            .map(|s| format!("## {}", heading_for(s)))
            .collect();
        let actual: Vec<&str> = markdown.lines().filter(|l| l.starts_with("## ")).collect();

        assert_eq!(actual, expected);
        assert_eq!(count_h2(&markdown), expected.len());
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut store = ComposerStore::new(SectionRegistry::new());
        store.set_title("Same");
        store.set_description("Twice");

        assert_eq!(store.render(), store.render());
    }

    #[test]
    fn test_disable_and_reenable_restores_block() {
        let mut store = ComposerStore::new(SectionRegistry::new());
        store.set_title("Toggle");
        store
            .registry
            .update_content(SectionKey::Installation, "cargo install toggle")
            .unwrap();
        let original = store.render();
        assert!(original.contains("## Installation\n\ncargo install toggle\n\n"));

        store.registry.set_enabled(SectionKey::Installation, false);
        let disabled = store.render();
        assert!(!disabled.contains("## Installation"));
        assert_eq!(
            store.registry.get(SectionKey::Installation).unwrap().content,
            "cargo install toggle"
        );

        store.registry.set_enabled(SectionKey::Installation, true);
        assert_eq!(store.render(), original);
    }

    #[test]
    fn test_reset_content_renders_template_block() {
        let mut store = ComposerStore::new(SectionRegistry::new());
        store.registry.update_content(SectionKey::TechStack, "Rust").unwrap();
        store.registry.reset_content(SectionKey::TechStack);

        let markdown = store.render();
        assert!(markdown.contains(&format!("## Tech Stack\n\n{}\n\n", templates::TECH_STACK)));
    }

    #[test]
    fn test_custom_section_renders_at_end() {
        let mut store = ComposerStore::new(SectionRegistry::new());
        store.registry.add_custom_section("My Notes").unwrap();
        store.registry.update_content("mynotes", "remember").unwrap();

        let markdown = store.render();
        assert!(markdown.ends_with("## My Notes\n\nremember\n\n"));
    }
}
