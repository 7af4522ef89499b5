/// Returns the first `limit` characters of `text` if it is longer than that,
/// or `None` when the whole text fits.
pub fn excerpt(text: &str, limit: usize) -> Option<&str> {
    text.char_indices()
        .nth(limit)
        .map(|(index, _)| text[..index].trim_end())
}

/// Truncates a string in place so that it has at most `max_chars` characters.
pub(crate) fn truncate_chars(text: &mut String, max_chars: usize) {
    if let Some((index, _)) = text.char_indices().nth(max_chars) {
        text.truncate(index);
    }
}

/// Returns `true` if the text is empty or only whitespace.
#[inline]
pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{excerpt, truncate_chars};

    #[test]
    fn it_cuts_excerpts() {
        assert_eq!(excerpt("short", 80), None);
        assert_eq!(excerpt("exactly", 7), None);
        assert_eq!(excerpt("hello world", 6), Some("hello"));
        assert_eq!(excerpt("héllo wörld", 4), Some("héll"));
    }

    #[test]
    fn it_truncates_chars() {
        let mut phone = "123456789012".to_owned();
        truncate_chars(&mut phone, 10);
        assert_eq!(phone, "1234567890");

        let mut name = "zoë".to_owned();
        truncate_chars(&mut name, 10);
        assert_eq!(name, "zoë");
    }
}
