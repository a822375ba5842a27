/// Cut `text` to at most `max_chars` characters.
///
/// Counting is done in `char`s so the result is always valid UTF-8 and a
/// text that was already cut normalizes to itself.
pub fn normalize_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => text[..byte_idx].to_string(),
        None => text.to_string(),
    }
}

/// Empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_unchanged() {
        assert_eq!(normalize_text("hello", 10), "hello");
        assert_eq!(normalize_text("hello", 5), "hello");
    }

    #[test]
    fn long_text_is_cut_on_char_boundary() {
        assert_eq!(normalize_text("héllo wörld", 4), "héll");
        assert_eq!(normalize_text("日本語テキスト", 3), "日本語");
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_text(&"x".repeat(60), 50);
        assert_eq!(normalize_text(&once, 50), once);
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t"));
        assert!(!is_blank(" a "));
    }
}
