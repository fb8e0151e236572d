use std::borrow::Cow;

/// Cuts `text` down to at most `ceiling` UTF-8 bytes.
///
/// Returns the text to forward and whether it was cut. The cut happens at exactly
/// `ceiling` bytes; a multi-byte character split at the boundary decodes to
/// U+FFFD rather than being dropped.
pub fn truncate_to_byte_ceiling(text: &str, ceiling: usize) -> (Cow<'_, str>, bool) {
    if text.len() <= ceiling {
        return (Cow::Borrowed(text), false);
    }
    (String::from_utf8_lossy(&text.as_bytes()[..ceiling]), true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_borrowed_untouched() {
        let (text, truncated) = truncate_to_byte_ceiling("hello", 5);
        assert!(matches!(text, Cow::Borrowed("hello")));
        assert!(!truncated);
    }

    #[test]
    fn test_ascii_is_cut_to_exact_ceiling() {
        let input = "a".repeat(25);
        let (text, truncated) = truncate_to_byte_ceiling(&input, 10);
        assert_eq!(text, "a".repeat(10));
        assert!(truncated);
    }

    #[test]
    fn test_split_multibyte_character_is_replaced() {
        // "é" is two bytes; a ceiling of 4 splits the second one.
        let (text, truncated) = truncate_to_byte_ceiling("aéé", 4);
        assert_eq!(text, "aé\u{FFFD}");
        assert!(truncated);
    }
}
