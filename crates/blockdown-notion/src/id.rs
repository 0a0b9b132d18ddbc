//! Notion object ID normalization.

use uuid::Uuid;

use crate::error::NotionError;

/// Length of a UUID without dashes.
const COMPACT_LEN: usize = 32;

/// Normalize a Notion object ID to hyphenated lowercase UUID form.
///
/// Accepts dashed and undashed IDs as well as page URLs and slugs such as
/// `https://www.notion.so/My-Page-0123456789abcdef0123456789abcdef?pvs=4`,
/// where the ID is the trailing 32 hex digits.
pub fn normalize_id(id: &str) -> Result<String, NotionError> {
    let invalid = || NotionError::InvalidId { id: id.to_owned() };

    let segment = id
        .trim()
        .split(['?', '#'])
        .next()
        .unwrap_or_default()
        .trim_end_matches('/');
    let segment = segment.rsplit('/').next().unwrap_or(segment);

    let compact: String = segment.chars().filter(|c| *c != '-').collect();
    // Only the trailing 32 characters form the ID.
    let start = compact
        .char_indices()
        .rev()
        .nth(COMPACT_LEN - 1)
        .map(|(index, _)| index)
        .ok_or_else(invalid)?;
    let tail = &compact[start..];

    let uuid = Uuid::try_parse(tail).map_err(|_| invalid())?;
    Ok(uuid.hyphenated().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HYPHENATED: &str = "01234567-89ab-cdef-0123-456789abcdef";

    #[test]
    fn test_normalize_compact_id() {
        assert_eq!(
            normalize_id("0123456789abcdef0123456789abcdef").unwrap(),
            HYPHENATED
        );
    }

    #[test]
    fn test_normalize_hyphenated_id() {
        assert_eq!(normalize_id(HYPHENATED).unwrap(), HYPHENATED);
    }

    #[test]
    fn test_normalize_uppercase_id() {
        assert_eq!(
            normalize_id("0123456789ABCDEF0123456789ABCDEF").unwrap(),
            HYPHENATED
        );
    }

    #[test]
    fn test_normalize_page_url() {
        let url = "https://www.notion.so/team/My-Page-0123456789abcdef0123456789abcdef?pvs=4";
        assert_eq!(normalize_id(url).unwrap(), HYPHENATED);
    }

    #[test]
    fn test_normalize_slug() {
        assert_eq!(
            normalize_id("Roadmap-0123456789abcdef0123456789abcdef").unwrap(),
            HYPHENATED
        );
    }

    #[test]
    fn test_normalize_unicode_slug_url() {
        let url = "https://www.notion.so/Café-Überblick-0123456789abcdef0123456789abcdef";
        assert_eq!(normalize_id(url).unwrap(), HYPHENATED);
    }

    #[test]
    fn test_reject_short_id() {
        let err = normalize_id("abc123").unwrap_err();
        assert!(matches!(err, NotionError::InvalidId { ref id } if id == "abc123"));
    }

    #[test]
    fn test_reject_non_hex_id() {
        assert!(normalize_id("zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz").is_err());
    }

    #[test]
    fn test_reject_non_ascii_id() {
        assert!(normalize_id("éééééééééééééééééééééééééééééééééé").is_err());
    }
}
