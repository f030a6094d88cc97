//! Whitespace-token and vowel helpers over plain text.

/// Whether `c` belongs to the Hungarian vowel set, in either case.
///
/// The set is `a e i o u á é í ó ö ő ú ü ű`.
#[must_use]
pub const fn is_vowel(c: char) -> bool {
    matches!(
        c,
        'a' | 'e' | 'i' | 'o' | 'u' | 'á' | 'é' | 'í' | 'ó' | 'ö' | 'ő' | 'ú' | 'ü' | 'ű'
            | 'A' | 'E' | 'I' | 'O' | 'U' | 'Á' | 'É' | 'Í' | 'Ó' | 'Ö' | 'Ő' | 'Ú' | 'Ü' | 'Ű'
    )
}

/// Count the characters of `text` that are vowels according to [`is_vowel`].
///
/// ```
/// assert_eq!(fnkit_core::vowel_count("Helló Világ"), 4);
/// ```
#[must_use]
pub fn vowel_count(text: &str) -> usize {
    text.chars().filter(|&c| is_vowel(c)).count()
}

/// Token separators: Unicode `White_Space` plus the byte order mark U+FEFF,
/// minus NEXT LINE U+0085.
fn is_separator(c: char) -> bool {
    match c {
        '\u{FEFF}' => true,
        '\u{0085}' => false,
        _ => c.is_whitespace(),
    }
}

/// Return the first longest whitespace-delimited token of `sentence`.
///
/// Length is counted in characters. A later token replaces the current best
/// only when strictly longer, so ties go to the earliest token. Blank input
/// yields `""`. U+FEFF separates tokens; U+0085 does not.
///
/// ```
/// assert_eq!(fnkit_core::longest_word(" Egy gyors teszt "), "gyors");
/// ```
#[must_use]
pub fn longest_word(sentence: &str) -> &str {
    if sentence.trim_matches(is_separator).is_empty() {
        return "";
    }

    let (longest, _) = sentence
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .fold(("", 0_usize), |(best, best_len), word| {
            let len = word.chars().count();
            if len > best_len {
                (word, len)
            } else {
                (best, best_len)
            }
        });
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_longest_word_normal_sentence() {
        assert_eq!(
            longest_word("A gyors barna róka átugrik a lusta kutyán"),
            "átugrik"
        );
    }

    #[test]
    fn test_longest_word_single_word() {
        assert_eq!(longest_word("Helló"), "Helló");
    }

    #[test]
    fn test_longest_word_blank() {
        assert_eq!(longest_word(""), "");
        assert_eq!(longest_word(" \t\n "), "");
    }

    #[test]
    fn test_longest_word_extra_spaces() {
        assert_eq!(longest_word(" Egy gyors teszt "), "gyors");
        assert_eq!(longest_word("ab\t\tcd   efg\n"), "efg");
    }

    #[test]
    fn test_longest_word_tie_keeps_first() {
        assert_eq!(longest_word("abc def ghi"), "abc");
        assert_eq!(longest_word("szilva barack"), "szilva");
        assert_eq!(longest_word("egy kettő három"), "kettő");
    }

    #[test]
    fn test_longest_word_counts_characters_not_bytes() {
        // "őűő" is 6 bytes but 3 characters.
        assert_eq!(longest_word("őűő abcd"), "abcd");
    }

    #[test]
    fn test_longest_word_byte_order_mark_is_blank() {
        assert_eq!(longest_word("\u{FEFF}"), "");
        assert_eq!(longest_word("\u{FEFF}alma\u{FEFF}ki"), "alma");
    }

    #[test]
    fn test_longest_word_next_line_joins_tokens() {
        assert_eq!(longest_word("ab\u{0085}cd efgh"), "ab\u{0085}cd");
    }

    #[test]
    fn test_longest_word_unicode_spaces_separate() {
        assert_eq!(longest_word("egy\u{3000}kettő\u{00A0}hat"), "kettő");
    }

    #[test]
    fn test_vowel_count_normal_text() {
        assert_eq!(vowel_count("Helló Világ"), 4);
    }

    #[test]
    fn test_vowel_count_consonants_only() {
        assert_eq!(vowel_count("bcdfg"), 0);
    }

    #[test]
    fn test_vowel_count_mixed_case() {
        assert_eq!(vowel_count("ÁeIoÚ"), 5);
        assert_eq!(vowel_count("ŐŰÖÜőűöü"), 8);
    }

    #[test]
    fn test_vowel_count_empty() {
        assert_eq!(vowel_count(""), 0);
    }

    #[test]
    fn test_vowel_count_ignores_other_accents() {
        assert_eq!(vowel_count("àâäyY"), 0);
    }

    proptest! {
        #[test]
        fn prop_longest_word_is_a_token(sentence in "[a-zá ]{0,40}") {
            let word = longest_word(&sentence);
            prop_assert!(word.is_empty() || sentence.split(is_separator).any(|t| t == word));
        }

        #[test]
        fn prop_no_token_is_longer(sentence in "[\\PC\u{FEFF}\u{0085}]{0,40}") {
            let best = longest_word(&sentence).chars().count();
            prop_assert!(sentence.split(is_separator).all(|t| t.chars().count() <= best));
        }

        #[test]
        fn prop_vowel_count_bounded_by_length(text in "\\PC{0,40}") {
            prop_assert!(vowel_count(&text) <= text.chars().count());
        }

        #[test]
        fn prop_vowel_count_case_insensitive(text in "[a-zA-ZáéíóöőúüűÁÉÍÓÖŐÚÜŰ]{0,40}") {
            prop_assert_eq!(vowel_count(&text), vowel_count(&text.to_uppercase()));
            prop_assert_eq!(vowel_count(&text), vowel_count(&text.to_lowercase()));
        }
    }
}
