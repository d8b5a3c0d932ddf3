// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Key to multi-value string mapping for query strings and form bodies

use std::collections::btree_map;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

/// Ordered multi-value parameters
///
/// Keys are kept sorted so encoding is deterministic; values keep the
/// order they were added in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    values: BTreeMap<String, Vec<String>>,
}

impl FormValues {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an `application/x-www-form-urlencoded` string
    pub fn parse(input: &str) -> Self {
        form_urlencoded::parse(input.as_bytes())
            .into_owned()
            .collect()
    }

    /// Append a value to a key
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.entry(key.into()).or_default().push(value.into());
    }

    /// Replace all values of a key with a single value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), vec![value.into()]);
    }

    /// Builder form of [`FormValues::add`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.add(key, value);
        self
    }

    /// First value for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// All values for a key
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove a key and return its values
    pub fn remove(&mut self, key: &str) -> Option<Vec<String>> {
        self.values.remove(key)
    }

    /// Whether the key is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate keys in sorted order with their values
    pub fn iter(&self) -> btree_map::Iter<'_, String, Vec<String>> {
        self.values.iter()
    }

    /// URL-encode as `k=v&k=v2`, keys sorted
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.values {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FormValues::new();
        for (key, value) in iter {
            values.add(key, value);
        }
        values
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for FormValues {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<'a> IntoIterator for &'a FormValues {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = btree_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keeps_value_order() {
        let values = FormValues::parse("b=2&a=1&b=3");
        assert_eq!(values.len(), 2);
        assert_eq!(values.get("a"), Some("1"));
        assert_eq!(values.get_all("b"), ["2", "3"]);
    }

    #[test]
    fn test_encode_sorts_keys_and_escapes() {
        let values = FormValues::from([("z", "last"), ("a", "x y"), ("a", "&=")]);
        assert_eq!(values.encode(), "a=x+y&a=%26%3D&z=last");
    }

    #[test]
    fn test_set_replaces() {
        let mut values = FormValues::new().with("k", "1").with("k", "2");
        values.set("k", "3");
        assert_eq!(values.get_all("k"), ["3"]);
        assert!(values.remove("k").is_some());
        assert!(values.is_empty());
        assert_eq!(values.encode(), "");
    }

    #[test]
    fn test_parse_decodes_plus_and_percent() {
        let values = FormValues::parse("q=hello+world&e=%C3%A9");
        assert_eq!(values.get("q"), Some("hello world"));
        assert_eq!(values.get("e"), Some("é"));
    }
}
