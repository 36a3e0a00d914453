//! Data types for Index Herbariorum API responses
//!
//! Payloads are passed through as `serde_json::Value`; only the `meta` block
//! shared by every response is typed.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IndexHerbariorumError;

/// Query key the service uses to switch a search to CSV output
pub const DOWNLOAD_KEY: &str = "download";

/// File written by `export_csv` when no destination is given
pub const DEFAULT_CSV_FILENAME: &str = "index_herbariorum.csv";

/// Searchable collections that can be exported as CSV
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Staff,
    Institutions,
}

impl Resource {
    pub const ALL: [Resource; 2] = [Resource::Staff, Resource::Institutions];

    /// Path segment used by the service for this resource
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Institutions => "institutions",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Resource {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Resource {
    type Err = IndexHerbariorumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| IndexHerbariorumError::InvalidResource(s.to_string()))
    }
}

/// `meta` block present on every JSON response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Meta {
    /// HTTP status echoed by the service
    pub code: u16,
    /// Number of records matching the request
    pub hits: u64,
}

/// Minimal view of a response used to read its metadata
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope {
    pub(crate) meta: Meta,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_from_str() {
        assert_eq!("staff".parse::<Resource>().unwrap(), Resource::Staff);
        assert_eq!(
            "institutions".parse::<Resource>().unwrap(),
            Resource::Institutions
        );
    }

    #[test]
    fn test_resource_rejects_unknown_and_mixed_case() {
        for name in ["countries", "Staff", ""] {
            let err = name.parse::<Resource>().unwrap_err();
            assert!(matches!(err, IndexHerbariorumError::InvalidResource(ref n) if n == name));
        }
    }

    #[test]
    fn test_envelope_ignores_payload() {
        let body = serde_json::json!({
            "meta": { "code": 200, "hits": 3121 },
            "data": [{ "irn": 124921, "code": "ALA" }]
        });
        let envelope: Envelope = serde_json::from_value(body).unwrap();
        assert_eq!(envelope.meta, Meta { code: 200, hits: 3121 });
    }

    #[test]
    fn test_envelope_requires_integer_hits() {
        let body = serde_json::json!({ "meta": { "code": 200, "hits": -1 } });
        assert!(serde_json::from_value::<Envelope>(body).is_err());
    }
}
