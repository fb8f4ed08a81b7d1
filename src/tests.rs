#[cfg(test)]
mod tests {

    mod transliterate_tests {
        use crate::services::transliterate::{latin_for, transliterate};

        #[test]
        fn test_transliterate_digraphs() {
            assert_eq!(transliterate("ЊЊњњ"), "NjNjnjnj");
            assert_eq!(transliterate("Ђорђе"), "Djordje");
            assert_eq!(transliterate("Љубав џеп"), "Ljubav dzep");
        }

        #[test]
        fn test_transliterate_full_alphabet() {
            assert_eq!(
                transliterate("абвгдђежзијклљмнњопрстћуфхцчџш"),
                "abvgddjezzijklljmnnjoprstcufhccdzs"
            );
            assert_eq!(
                transliterate("АБВГДЂЕЖЗИЈКЛЉМНЊОПРСТЋУФХЦЧЏШ"),
                "ABVGDDjEZZIJKLLjMNNjOPRSTCUFHCCDzS"
            );
        }

        #[test]
        fn test_transliterate_passes_through_unmapped() {
            assert_eq!(transliterate("Čuvar 2024, ok!"), "Čuvar 2024, ok!");
            assert_eq!(transliterate("  \t\n"), "  \t\n");
        }

        #[test]
        fn test_transliterate_mixed_script() {
            assert_eq!(transliterate("БЗР portal v2"), "BZR portal v2");
        }

        #[test]
        fn test_transliterate_empty() {
            assert_eq!(transliterate(""), "");
        }

        #[test]
        fn test_non_serbian_cyrillic_is_unmapped() {
            assert_eq!(latin_for('ы'), None);
            assert_eq!(latin_for('ъ'), None);
            assert_eq!(latin_for('ш'), Some("s"));
        }
    }

    mod slug_tests {
        use crate::services::slug::{
            generate_slug, generate_unique_slug, normalize, uniquify, validate_slug,
            MAX_SLUG_LENGTH,
        };

        const SAMPLES: &[&str] = &[
            "",
            "   ",
            "Безбедност и здравље на раду!",
            "Правилник о превентивним мерама за безбедан рад",
            "  -- Hello -- World -- ",
            "Обука 2024 – ниво 1",
            "___",
            "Crème brûlée",
            "Обьект съезд",
            "a\tb\nc",
            "!!!-!!!",
            "ДЖ Џ",
        ];

        fn long_samples() -> Vec<String> {
            vec![
                "x".repeat(150),
                format!("{} b", "a".repeat(99)),
                "Ђ ".repeat(80),
                "word ".repeat(40),
            ]
        }

        fn all_samples() -> Vec<String> {
            SAMPLES
                .iter()
                .map(|s| s.to_string())
                .chain(long_samples())
                .collect()
        }

        #[test]
        fn test_generate_slug_serbian_title() {
            assert_eq!(
                generate_slug("Безбедност и здравље на раду!"),
                "bezbednost-i-zdravlje-na-radu"
            );
        }

        #[test]
        fn test_generate_slug_multiple_spaces() {
            assert_eq!(generate_slug("   multiple   spaces  "), "multiple-spaces");
        }

        #[test]
        fn test_generate_slug_empty() {
            assert_eq!(generate_slug(""), "");
            assert_eq!(generate_slug(" \t\n "), "");
        }

        #[test]
        fn test_generate_slug_collapses_hyphens() {
            assert_eq!(generate_slug("  -- Hello -- World -- "), "hello-world");
            assert_eq!(generate_slug("Обука 2024 – ниво 1"), "obuka-2024-nivo-1");
        }

        #[test]
        fn test_generate_slug_drops_non_ascii() {
            assert_eq!(generate_slug("Crème brûlée"), "crme-brle");
            assert_eq!(generate_slug("Обьект"), "obekt");
        }

        #[test]
        fn test_generate_slug_whitespace_kinds() {
            assert_eq!(generate_slug("Radno\tmesto\nopis"), "radno-mesto-opis");
        }

        #[test]
        fn test_generate_slug_truncates() {
            assert_eq!(generate_slug(&"x".repeat(150)), "x".repeat(MAX_SLUG_LENGTH));
        }

        #[test]
        fn test_generate_slug_truncation_never_ends_with_hyphen() {
            let slug = generate_slug(&format!("{} b", "a".repeat(99)));
            assert_eq!(slug, "a".repeat(99));
        }

        #[test]
        fn test_normalize_is_generate_slug() {
            assert_eq!(normalize("Шта је БЗР?"), "sta-je-bzr");
        }

        #[test]
        fn test_generated_slugs_hold_invariants() {
            for input in all_samples() {
                let slug = generate_slug(&input);
                assert!(
                    slug.chars()
                        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                    "{:?} -> {:?}",
                    input,
                    slug
                );
                assert!(!slug.starts_with('-'), "{:?} -> {:?}", input, slug);
                assert!(!slug.ends_with('-'), "{:?} -> {:?}", input, slug);
                assert!(!slug.contains("--"), "{:?} -> {:?}", input, slug);
                assert!(slug.len() <= MAX_SLUG_LENGTH, "{:?} -> {:?}", input, slug);
            }
        }

        #[test]
        fn test_generate_slug_is_idempotent() {
            for input in all_samples() {
                let once = generate_slug(&input);
                assert_eq!(generate_slug(&once), once);
            }
        }

        #[test]
        fn test_non_empty_slugs_validate() {
            for input in all_samples() {
                let slug = generate_slug(&input);
                if !slug.is_empty() {
                    assert!(validate_slug(&slug), "{:?}", slug);
                }
            }
        }

        #[test]
        fn test_uniquify_free_base() {
            assert_eq!(uniquify("report", Vec::<String>::new()), "report");
            assert_eq!(uniquify("report", ["report-1"]), "report");
        }

        #[test]
        fn test_uniquify_counts_from_one() {
            assert_eq!(uniquify("report", ["report"]), "report-1");
            assert_eq!(
                uniquify("report", ["report", "report-1", "report-2"]),
                "report-3"
            );
        }

        #[test]
        fn test_uniquify_fills_first_gap() {
            assert_eq!(uniquify("report", ["report", "report-2"]), "report-1");
        }

        #[test]
        fn test_uniquify_empty_base() {
            assert_eq!(uniquify("", Vec::<&str>::new()), "");
            assert_eq!(uniquify("", [""]), "-1");
            assert_eq!(uniquify("", ["", "-1"]), "-2");
        }

        #[test]
        fn test_uniquify_does_not_touch_input() {
            let existing = vec!["obuka".to_string(), "obuka-1".to_string()];
            assert_eq!(generate_unique_slug("obuka", &existing), "obuka-2");
            assert_eq!(existing, vec!["obuka".to_string(), "obuka-1".to_string()]);
        }

        #[test]
        fn test_validate_slug_valid() {
            assert!(validate_slug("hello-world"));
            assert!(validate_slug("bzr-2024"));
            assert!(validate_slug("a"));
            assert!(validate_slug("123"));
            assert!(validate_slug(&"a".repeat(MAX_SLUG_LENGTH)));
        }

        #[test]
        fn test_validate_slug_invalid() {
            assert!(!validate_slug(""));
            assert!(!validate_slug("Hello-World"));
            assert!(!validate_slug("hello_world"));
            assert!(!validate_slug("hello world"));
            assert!(!validate_slug("-hello"));
            assert!(!validate_slug("hello-"));
            assert!(!validate_slug("hello--world"));
            assert!(!validate_slug("безбедност"));
            assert!(!validate_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)));
        }
    }

    mod config_tests {
        use crate::Config;

        #[test]
        fn test_parse_minimal_config_uses_defaults() {
            let config = Config::parse("[database]\npath = \"./data/bzr.db\"\n").unwrap();
            assert_eq!(config.database.pool_size, 10);
            assert_eq!(config.slugs.default_namespace, "documents");
            assert_eq!(config.slugs.max_attempts, 8);
        }

        #[test]
        fn test_parse_rejects_zero_attempts() {
            let err = Config::parse(
                "[database]\npath = \"bzr.db\"\n\n[slugs]\nmax_attempts = 0\n",
            )
            .unwrap_err();
            assert!(err.to_string().contains("max_attempts"));
        }

        #[test]
        fn test_parse_rejects_empty_namespace() {
            let result = Config::parse(
                "[database]\npath = \"bzr.db\"\n\n[slugs]\ndefault_namespace = \" \"\n",
            );
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_rejects_zero_pool() {
            let result = Config::parse("[database]\npath = \"bzr.db\"\npool_size = 0\n");
            assert!(result.is_err());
        }

        #[test]
        fn test_parse_requires_database() {
            assert!(Config::parse("[slugs]\nmax_attempts = 3\n").is_err());
        }
    }
}
