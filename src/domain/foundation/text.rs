//! Character-boundary-safe text helpers.

/// Returns at most the first `max_chars` characters of `text`.
///
/// Counts `char`s, not bytes, so multi-byte text is never split mid-character.
pub fn char_prefix(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_returned_whole() {
        assert_eq!(char_prefix("MMM", 10), "MMM");
        assert_eq!(char_prefix("", 10), "");
    }

    #[test]
    fn long_text_is_cut_at_limit() {
        assert_eq!(char_prefix("Marketing Mix Modeling", 9), "Marketing");
        assert_eq!(char_prefix("abc", 0), "");
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        let text = "été à Paris";
        assert_eq!(char_prefix(text, 3), "été");
        assert_eq!(char_prefix(text, 5), "été à");
    }
}
