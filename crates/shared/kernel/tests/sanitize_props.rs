use cptg_kernel::sanitize::{is_key_char, sanitize_key, sanitize_text_field};
use proptest::prelude::*;

proptest! {
    #[test]
    fn keys_only_contain_allowed_chars(raw in any::<String>()) {
        let key = sanitize_key(&raw);
        prop_assert!(key.chars().all(is_key_char), "unexpected char in {key:?}");
    }

    #[test]
    fn key_sanitization_is_idempotent(raw in any::<String>()) {
        let once = sanitize_key(&raw);
        prop_assert_eq!(sanitize_key(&once), once);
    }

    #[test]
    fn keys_ignore_ascii_case(raw in "[A-Za-z0-9_ -]{0,24}") {
        prop_assert_eq!(sanitize_key(&raw.to_uppercase()), sanitize_key(&raw.to_lowercase()));
    }

    #[test]
    fn labels_have_no_controls_or_whitespace_runs(raw in any::<String>()) {
        let label = sanitize_text_field(&raw);
        prop_assert!(!label.chars().any(char::is_control));
        prop_assert!(!label.contains("  "));
        prop_assert_eq!(label.trim(), label.as_str());
        prop_assert!(label.chars().filter(|c| c.is_whitespace()).all(|c| c == ' '));
    }

    #[test]
    fn label_sanitization_is_idempotent(raw in r"[ -~\t\n<>/%]{0,64}") {
        let once = sanitize_text_field(&raw);
        prop_assert_eq!(sanitize_text_field(&once), once);
    }

    #[test]
    fn plain_words_survive(words in proptest::collection::vec("[A-Za-z]{1,8}", 1..5)) {
        let joined = words.join(" ");
        prop_assert_eq!(sanitize_text_field(&format!("  {joined}\n")), joined);
    }
}
