use std::collections::BTreeMap;

use crate::error::{IndexHerbariorumError, Result};
use crate::types::DOWNLOAD_KEY;

/// Query parameters forwarded verbatim to a search endpoint
///
/// Keys are kept sorted so the generated query string is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    inner: BTreeMap<String, String>,
}

impl SearchParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.inner.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.inner.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.inner.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Reject caller-supplied parameters that collide with the CSV switch
    pub(crate) fn ensure_no_reserved_keys(&self) -> Result<()> {
        if self.contains_key(DOWNLOAD_KEY) {
            return Err(IndexHerbariorumError::InvalidParameter(
                DOWNLOAD_KEY.to_string(),
            ));
        }
        Ok(())
    }

    /// Copy with the CSV switch turned on
    pub(crate) fn for_download(&self) -> Self {
        self.clone().with(DOWNLOAD_KEY, "yes")
    }
}

impl<K, V> FromIterator<(K, V)> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for SearchParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reserved_key_rejected() {
        let params = SearchParams::from([("download", "yes"), ("country", "italy")]);
        let err = params.ensure_no_reserved_keys().unwrap_err();
        assert!(matches!(err, IndexHerbariorumError::InvalidParameter(ref k) if k == "download"));
    }

    #[test]
    fn test_ordinary_keys_accepted() {
        let params = SearchParams::new().with("code", "ny").with("sort", "lastName");
        assert!(params.ensure_no_reserved_keys().is_ok());
        assert!(SearchParams::new().ensure_no_reserved_keys().is_ok());
    }

    #[test]
    fn test_for_download_leaves_caller_params_untouched() {
        let params = SearchParams::from([("country", "italy")]);
        let download = params.for_download();

        assert_eq!(download.get("download"), Some("yes"));
        assert_eq!(download.get("country"), Some("italy"));
        assert!(!params.contains_key("download"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_iteration_is_sorted_by_key() {
        let params = SearchParams::from([("sort", "code"), ("city", "rome"), ("country", "italy")]);
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["city", "country", "sort"]);
    }
}
