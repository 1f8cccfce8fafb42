//! String normalisation helpers shared by value objects and aggregates.

/// Trims an optional string, collapsing blank values to `None`.
///
/// Optional free-text fields (request ids, paths, user agents) arrive from
/// clients as either absent, empty or padded; all three normalise here.
///
/// # Examples
///
/// ```
/// use starmap_domain::common::trimmed_or_none;
///
/// assert_eq!(trimmed_or_none(Some("  req-1 ".to_string())), Some("req-1".to_string()));
/// assert_eq!(trimmed_or_none(Some("   ".to_string())), None);
/// assert_eq!(trimmed_or_none(None), None);
/// ```
pub fn trimmed_or_none(value: Option<String>) -> Option<String> {
    value.and_then(|raw| {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Length in characters, not bytes.
pub(crate) fn char_len(value: &str) -> usize {
    value.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trimmed_or_none_with_content() {
        assert_eq!(
            trimmed_or_none(Some("hello".to_string())),
            Some("hello".to_string())
        );
        assert_eq!(
            trimmed_or_none(Some("\thello world\n".to_string())),
            Some("hello world".to_string())
        );
    }

    #[test]
    fn test_trimmed_or_none_blank_is_none() {
        assert_eq!(trimmed_or_none(Some(String::new())), None);
        assert_eq!(trimmed_or_none(Some(" \t\n".to_string())), None);
    }

    #[test]
    fn test_char_len_counts_characters() {
        assert_eq!(char_len("Étoile"), 6);
        assert_eq!(char_len(""), 0);
    }
}
