//! Path parameters and query strings.
//!
//! - [`RouteParams`]: values captured by `:name` and `*` segments while
//!   matching a path against the [`RouteTable`](crate::RouteTable).
//! - [`QueryParams`]: the `?key=value&...` part of a location. Keys keep
//!   their insertion order so a location always serializes the same way;
//!   values are percent-decoded on parse and percent-encoded on output.
//!
//! ```
//! use gpui_admin_router::QueryParams;
//!
//! let query = QueryParams::from_query_string("redirect=%2Freports&tab=1");
//! assert_eq!(query.get("redirect"), Some("/reports"));
//! assert_eq!(query.to_query_string(), "redirect=%2Freports&tab=1");
//! ```

use std::collections::HashMap;

/// Parameters captured from dynamic path segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RouteParams {
    params: HashMap<String, String>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter parsed as `T`.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.params.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }
}

/// Ordered, multi-valued query parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string (without the leading `?`).
    ///
    /// A key without `=` gets an empty value. Undecodable escapes are kept
    /// as written.
    pub fn from_query_string(query: &str) -> Self {
        let pairs = query
            .split('&')
            .filter(|pair| !pair.is_empty())
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
                (decode_component(key), decode_component(value))
            })
            .collect();
        Self { pairs }
    }

    /// Build from `(key, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            pairs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn get_all(&self, key: &str) -> Vec<&str> {
        self.pairs
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
            .collect()
    }

    /// Append a value, keeping existing values for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.pairs.push((key.into(), value.into()));
    }

    /// Replace all values of `key` with a single value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        self.pairs.retain(|(k, _)| *k != key);
        self.pairs.push((key, value.into()));
    }

    pub fn contains(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Serialize, percent-encoding keys and values.
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-decode one URI component, falling back to the input when the
/// escapes do not form valid UTF-8.
pub fn decode_component(value: &str) -> String {
    urlencoding::decode(value).map_or_else(|_| value.to_string(), |decoded| decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_params_get_as() {
        let mut params = RouteParams::new();
        params.insert("id", "42");
        assert_eq!(params.get_as::<u32>("id"), Some(42));
        assert_eq!(params.get_as::<u32>("missing"), None);
        assert!(params.contains("id"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_query_parse_decodes_values() {
        let query = QueryParams::from_query_string("redirect=%2Fsystem%2Fuser&empty&tag=a&tag=b");
        assert_eq!(query.get("redirect"), Some("/system/user"));
        assert_eq!(query.get("empty"), Some(""));
        assert_eq!(query.get_all("tag"), vec!["a", "b"]);
        assert_eq!(query.len(), 4);
    }

    #[test]
    fn test_query_set_replaces() {
        let mut query = QueryParams::from_pairs([("a", "1"), ("b", "2"), ("a", "3")]);
        query.set("a", "9");
        assert_eq!(query.to_query_string(), "b=2&a=9");
    }

    #[test]
    fn test_query_serialization_encodes() {
        let query = QueryParams::from_pairs([("redirect", "/reports")]);
        assert_eq!(query.to_query_string(), "redirect=%2Freports");
    }

    #[test]
    fn test_decode_component_invalid_utf8_is_kept() {
        assert_eq!(decode_component("%E0%A4%A"), "%E0%A4%A");
        assert_eq!(decode_component("%2Fa"), "/a");
    }
}
