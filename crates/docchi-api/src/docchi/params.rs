//! Passthrough query parameters for the list endpoints.

use std::fmt;

use url::form_urlencoded;

/// A primitive query parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// String value.
    Str(String),
    /// Signed integer value.
    Int(i64),
    /// Unsigned integer value.
    UInt(u64),
    /// Floating point value.
    Float(f64),
    /// Boolean value, rendered as `true` / `false`.
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::UInt(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Str(String::from(value))
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        Self::UInt(u64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        Self::UInt(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Ordered key/value pairs forwarded verbatim as a query string.
///
/// Pairs are encoded in insertion order. Setting an existing key replaces
/// its value in place, so the key keeps its original position.
///
/// ```
/// use docchi_api::docchi::{QueryParams, to_query_string};
///
/// let params = QueryParams::new().param("page", 2).param("sort", "ASC");
/// assert_eq!(to_query_string(&params).as_deref(), Some("page=2&sort=ASC"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    pairs: Vec<(String, ParamValue)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Adds a parameter, builder style.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Sets a parameter, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// Returns the value for `key`, if set.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Returns `true` if no parameters are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Encodes parameters as an `application/x-www-form-urlencoded` string.
///
/// Returns `None` for an empty set so callers can omit the `?` entirely.
#[must_use]
pub fn to_query_string(params: &QueryParams) -> Option<String> {
    if params.is_empty() {
        return None;
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params.iter() {
        serializer.append_pair(key, &value.to_string());
    }
    Some(serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_params_yield_none() {
        // Arrange
        let params = QueryParams::new();

        // Act
        let query = to_query_string(&params);

        // Assert
        assert!(params.is_empty());
        assert_eq!(query, None);
    }

    #[test]
    fn test_single_param() {
        // Arrange
        let params = QueryParams::new().param("page", 2);

        // Act & Assert
        assert_eq!(to_query_string(&params).as_deref(), Some("page=2"));
    }

    #[test]
    fn test_insertion_order_is_kept() {
        // Arrange
        let params = QueryParams::new()
            .param("sort", "DESC")
            .param("page", 3_u32)
            .param("adult", false);

        // Act & Assert
        assert_eq!(
            to_query_string(&params).as_deref(),
            Some("sort=DESC&page=3&adult=false")
        );
    }

    #[test]
    fn test_reserved_characters_are_escaped() {
        // Arrange
        let params = QueryParams::new().param("name", "Fullmetal Alchemist: B&H=1/2?");

        // Act & Assert
        assert_eq!(
            to_query_string(&params).as_deref(),
            Some("name=Fullmetal+Alchemist%3A+B%26H%3D1%2F2%3F")
        );
    }

    #[test]
    fn test_non_ascii_is_percent_encoded() {
        // Arrange
        let params = QueryParams::new().param("string", "進撃");

        // Act & Assert
        assert_eq!(
            to_query_string(&params).as_deref(),
            Some("string=%E9%80%B2%E6%92%83")
        );
    }

    #[test]
    fn test_insert_replaces_existing_key_in_place() {
        // Arrange
        let mut params = QueryParams::new().param("page", 1).param("limit", 20);

        // Act
        params.insert("page", 5);

        // Assert
        assert_eq!(params.len(), 2);
        assert_eq!(params.get("page"), Some(&ParamValue::Int(5)));
        assert_eq!(to_query_string(&params).as_deref(), Some("page=5&limit=20"));
    }

    #[test]
    fn test_from_iterator() {
        // Arrange & Act
        let params: QueryParams = [("season", "spring"), ("type", "TV")].into_iter().collect();

        // Assert
        assert_eq!(
            to_query_string(&params).as_deref(),
            Some("season=spring&type=TV")
        );
    }

    #[test]
    fn test_param_value_display() {
        // Arrange & Act & Assert
        assert_eq!(ParamValue::from(-3).to_string(), "-3");
        assert_eq!(ParamValue::from(7_u64).to_string(), "7");
        assert_eq!(ParamValue::from(1.5).to_string(), "1.5");
        assert_eq!(ParamValue::from(2.0).to_string(), "2");
        assert_eq!(ParamValue::from(false).to_string(), "false");
        assert_eq!(ParamValue::from(true).to_string(), "true");
        assert_eq!(ParamValue::from(String::from("x")).to_string(), "x");
    }
}
