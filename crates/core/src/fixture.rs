//! Values written by the probe and the helpers used to display them.

/// Primary key of the row the probe upserts and reads back.
pub const PROBE_ROW_ID: &str = "TEST001";

/// Tracking number stored on the probe row.
pub const PROBE_TRACKING_NUMBER: &str = "TN001";

/// Sender name stored on the probe row.
pub const PROBE_SENDER_NAME: &str = "Test Sender";

/// How many characters of the `version()` string are shown.
pub const VERSION_PREVIEW_CHARS: usize = 50;

/// Return the prefix of `s` holding at most `max_chars` characters.
///
/// Cuts on a character boundary, so multi-byte text is never split.
///
/// # Examples
///
/// ```
/// use bluecart_core::fixture::truncate_chars;
///
/// assert_eq!(truncate_chars("PostgreSQL 16.4", 10), "PostgreSQL");
/// assert_eq!(truncate_chars("short", 50), "short");
/// ```
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorter_than_limit_is_unchanged() {
        assert_eq!(truncate_chars("PostgreSQL", 50), "PostgreSQL");
    }

    #[test]
    fn exact_length_is_unchanged() {
        assert_eq!(truncate_chars("abcde", 5), "abcde");
    }

    #[test]
    fn longer_than_limit_is_cut() {
        let version = "PostgreSQL 16.4 (Debian 16.4-1.pgdg120+2) on x86_64-pc-linux-gnu, compiled by gcc";
        let preview = truncate_chars(version, VERSION_PREVIEW_CHARS);
        assert_eq!(preview.chars().count(), VERSION_PREVIEW_CHARS);
        assert!(version.starts_with(preview));
    }

    #[test]
    fn multibyte_characters_are_not_split() {
        assert_eq!(truncate_chars("çàé€x", 4), "çàé€");
    }

    #[test]
    fn zero_limit_is_empty() {
        assert_eq!(truncate_chars("anything", 0), "");
    }
}
