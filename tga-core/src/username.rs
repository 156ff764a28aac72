//! Channel username normalization.

/// Normalizes user input into a bare channel username.
///
/// Accepts `@name`, `name`, `t.me/name` and `https://t.me/name` (optionally with `/s/`).
/// Returns `None` when nothing usable remains.
pub fn normalize_channel_username(input: &str) -> Option<String> {
    let mut value = input.trim();
    for prefix in ["https://", "http://"] {
        if let Some(rest) = value.strip_prefix(prefix) {
            value = rest;
        }
    }
    for prefix in ["t.me/s/", "t.me/", "telegram.me/"] {
        if let Some(rest) = value.strip_prefix(prefix) {
            value = rest;
            break;
        }
    }
    let value = value
        .trim_start_matches('@')
        .split(['/', '?'])
        .next()
        .unwrap_or_default()
        .trim();

    if value.is_empty() || value.chars().any(char::is_whitespace) {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_at_prefixed() {
        assert_eq!(normalize_channel_username("rustnews").as_deref(), Some("rustnews"));
        assert_eq!(normalize_channel_username(" @rustnews ").as_deref(), Some("rustnews"));
    }

    #[test]
    fn test_links() {
        assert_eq!(
            normalize_channel_username("https://t.me/rustnews").as_deref(),
            Some("rustnews")
        );
        assert_eq!(
            normalize_channel_username("t.me/s/rustnews/42").as_deref(),
            Some("rustnews")
        );
    }

    #[test]
    fn test_empty_or_invalid() {
        assert_eq!(normalize_channel_username(""), None);
        assert_eq!(normalize_channel_username("@"), None);
        assert_eq!(normalize_channel_username("two words"), None);
    }
}
