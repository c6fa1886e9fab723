//! Value sanitizer
//!
//! Normalizes raw node text into a single line with collapsed whitespace.

/// Normalize raw source text into a single-line value
///
/// Carriage returns and newlines are dropped (not replaced), tabs and any other
/// control characters become a single space, then every whitespace run collapses
/// to one space and the ends are trimmed. Dropping line breaks means `a\nb`
/// becomes `ab`.
pub fn sanitize_value(raw: &str) -> String {
    let flattened: String = raw
        .chars()
        .filter(|c| *c != '\r' && *c != '\n')
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();

    flattened.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLES: &[&str] = &[
        "",
        "   ",
        "public class Foo",
        "  int   x ;  ",
        "a\r\nb",
        "line one\nline two",
        "\tindented\t\tvalue\t",
        "mixed \r\n\t  runs\u{000B}\u{000C}end",
        "unicode\u{00A0}\u{2003}space",
        "\u{0001}bell\u{0007}",
        "already clean",
    ];

    #[test]
    fn test_strips_line_breaks_without_inserting_space() {
        assert_eq!(sanitize_value("foo\r\nbar"), "foobar");
        assert_eq!(sanitize_value("foo\n bar"), "foo bar");
    }

    #[test]
    fn test_tabs_become_single_spaces() {
        assert_eq!(sanitize_value("int\tx;"), "int x;");
        assert_eq!(sanitize_value("int\t\t \tx;"), "int x;");
    }

    #[test]
    fn test_other_control_characters_act_as_whitespace() {
        assert_eq!(sanitize_value("a\u{0000}b"), "a b");
    }

    #[test]
    fn test_collapses_and_trims() {
        assert_eq!(sanitize_value("   public    static  "), "public static");
        assert_eq!(sanitize_value("   "), "");
    }

    #[test]
    fn test_output_has_no_control_characters_or_double_spaces() {
        for sample in SAMPLES {
            let clean = sanitize_value(sample);
            assert!(
                !clean.contains('\r') && !clean.contains('\n') && !clean.contains('\t'),
                "Sanitized {:?} still contains a line break or tab: {:?}",
                sample,
                clean
            );
            assert!(
                !clean.chars().any(|c| c.is_control()),
                "Sanitized {:?} still contains control characters: {:?}",
                sample,
                clean
            );
            assert!(
                !clean.contains("  "),
                "Sanitized {:?} still contains a double space: {:?}",
                sample,
                clean
            );
            assert_eq!(clean, clean.trim(), "Sanitized value should be trimmed");
        }
    }

    #[test]
    fn test_idempotent() {
        for sample in SAMPLES {
            let once = sanitize_value(sample);
            assert_eq!(sanitize_value(&once), once, "Not idempotent for {:?}", sample);
        }
    }

    /// Arbitrary strings mixed with whitespace- and control-heavy ones
    fn raw_text() -> impl Strategy<Value = String> {
        prop_oneof![
            any::<String>(),
            r"[ \t\r\n\x0B\x0C\x00\x7F\x{85}\x{A0}\x{2003}a-z{};.]{0,80}",
        ]
    }

    proptest! {
        #[test]
        fn prop_output_is_one_clean_line(raw in raw_text()) {
            let clean = sanitize_value(&raw);
            prop_assert!(!clean.contains('\r') && !clean.contains('\n') && !clean.contains('\t'));
            prop_assert!(!clean.chars().any(char::is_control), "control character in {:?}", clean);
            prop_assert!(!clean.contains("  "), "double space in {:?}", clean);
            prop_assert_eq!(clean.as_str(), clean.trim());
        }

        #[test]
        fn prop_idempotent(raw in raw_text()) {
            let once = sanitize_value(&raw);
            prop_assert_eq!(sanitize_value(&once), once);
        }

        #[test]
        fn prop_words_survive_in_order(
            words in prop::collection::vec("[a-zA-Z0-9_]{1,8}", 0..10),
            gaps in prop::collection::vec(r"[\r\n]{0,2}[ \t][ \t\r\n]{0,2}", 10),
        ) {
            let raw: String = words
                .iter()
                .zip(gaps.iter())
                .map(|(word, gap)| format!("{}{}", gap, word))
                .collect();
            prop_assert_eq!(sanitize_value(&raw), words.join(" "));
        }
    }
}
