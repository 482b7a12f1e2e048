//! Docchi API response helpers.
//!
//! Responses are relayed as `serde_json::Value`; only the related-series
//! listing is inspected, because the client has to look inside it.

use serde_json::Value;

/// Returns `true` if `value` is a number equal to `mal_id`.
///
/// Integral floats (`9.0`) match; strings and other types never do.
#[allow(clippy::as_conversions, clippy::cast_precision_loss, clippy::float_cmp)]
fn mal_id_matches(value: &Value, mal_id: u64) -> bool {
    if let Some(n) = value.as_u64() {
        return n == mal_id;
    }
    value
        .as_f64()
        .is_some_and(|f| f.fract() == 0.0 && f == mal_id as f64)
}

/// Scans a `/series/related/{mal_id}` listing for the entry with `mal_id`
/// and returns its slug.
///
/// Entries that are not objects, have no numeric `mal_id`, or have no
/// string `slug` are skipped.
#[must_use]
pub fn find_related_slug(items: &[Value], mal_id: u64) -> Option<&str> {
    items
        .iter()
        .filter(|item| item.get("mal_id").is_some_and(|id| mal_id_matches(id, mal_id)))
        .find_map(|item| item.get("slug").and_then(Value::as_str))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use serde_json::json;

    use super::*;

    fn items(json: &str) -> Vec<Value> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_related_fixture() {
        // Arrange
        let json = include_str!("../../../../fixtures/docchi/series_related_21.json");

        // Act
        let items = items(json);

        // Assert
        assert_eq!(items.len(), 3);
        assert_eq!(find_related_slug(&items, 21), Some("one-piece"));
    }

    #[test]
    fn test_find_slug_matches_by_mal_id() {
        // Arrange
        let items = items(r#"[{"mal_id": 5, "slug": "a"}, {"mal_id": 9, "slug": "b"}]"#);

        // Act & Assert
        assert_eq!(find_related_slug(&items, 9), Some("b"));
        assert_eq!(find_related_slug(&items, 5), Some("a"));
        assert_eq!(find_related_slug(&items, 42), None);
    }

    #[test]
    fn test_find_slug_tolerates_missing_fields() {
        // Arrange
        let items = items(
            r#"[{"title": "no ids"}, {"mal_id": null, "slug": "x"}, {"mal_id": 7}, {"mal_id": 7, "slug": "y"}]"#,
        );

        // Act & Assert
        assert_eq!(find_related_slug(&items, 7), Some("y"));
    }

    #[test]
    fn test_find_slug_skips_mixed_type_siblings() {
        // Arrange
        let items = items(
            r#"[null, 3, "x", {"mal_id": "9", "slug": "str"}, {"mal_id": true, "slug": "bool"}, {"mal_id": 9, "slug": "b"}]"#,
        );

        // Act & Assert
        assert_eq!(find_related_slug(&items, 9), Some("b"));
    }

    #[test]
    fn test_find_slug_string_id_never_matches() {
        // Arrange
        let items = items(r#"[{"mal_id": "5", "slug": "a"}]"#);

        // Act & Assert
        assert_eq!(find_related_slug(&items, 5), None);
    }

    #[test]
    fn test_find_slug_matches_integral_float() {
        // Arrange
        let items = items(r#"[{"mal_id": 9.5, "slug": "half"}, {"mal_id": 9.0, "slug": "b"}]"#);

        // Act & Assert
        assert_eq!(find_related_slug(&items, 9), Some("b"));
    }

    #[test]
    fn test_mal_id_matches_rejects_negative_and_non_numbers() {
        // Arrange & Act & Assert
        assert!(mal_id_matches(&json!(9), 9));
        assert!(!mal_id_matches(&json!(-9), 9));
        assert!(!mal_id_matches(&json!(-9.0), 9));
        assert!(!mal_id_matches(&json!(null), 9));
        assert!(!mal_id_matches(&json!([9]), 9));
    }

    #[test]
    fn test_empty_list_has_no_match() {
        // Arrange & Act & Assert
        assert_eq!(find_related_slug(&[], 1), None);
    }
}
