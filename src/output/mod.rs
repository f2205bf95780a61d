// Output formatting — terminal display helpers.

pub mod terminal;

/// Truncate a string to at most `max_chars` characters, appending "..." if
/// anything was cut.
///
/// Byte slicing (`&text[..30]`) panics on multi-byte characters; this
/// counts chars so evidence previews are safe for any message content.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(max_chars).collect();
    truncated.push_str("...");
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_untouched() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn long_text_gets_ellipsis() {
        assert_eq!(truncate_chars("hello!", 5), "hello...");
    }

    #[test]
    fn multibyte_safe() {
        assert_eq!(truncate_chars("café résumé", 4), "café...");
    }
}
