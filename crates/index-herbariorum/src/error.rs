//! Error types for the Index Herbariorum API client

use std::fmt;

/// Errors that can occur when interacting with the Index Herbariorum API
#[derive(Debug)]
pub enum IndexHerbariorumError {
    /// A reserved query key was supplied by the caller (detected before any I/O)
    InvalidParameter(String),
    /// The service answered with a status other than 200
    Status(u16),
    /// CSV export was requested for a resource the service does not export
    InvalidResource(String),
    /// Writing the exported CSV file failed
    Io(std::io::Error),
    /// Transport-level failure (DNS, connection refused, timeout)
    Http(reqwest::Error),
    /// Failed to parse JSON response
    Json(serde_json::Error),
    /// The configured base URL cannot carry path segments
    InvalidBaseUrl(String),
}

impl IndexHerbariorumError {
    /// Whether the request itself was rejected: a non-200 status or an
    /// unsupported export resource.
    pub fn is_request_error(&self) -> bool {
        matches!(self, Self::Status(_) | Self::InvalidResource(_))
    }

    /// HTTP status returned by the service, if that was the failure
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl fmt::Display for IndexHerbariorumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter(key) => write!(
                f,
                "'{}' key not allowed, use export_csv() instead",
                key
            ),
            Self::Status(code) => write!(f, "HTTP error: {}", code),
            Self::InvalidResource(name) => write!(f, "Invalid resource name: {}", name),
            Self::Io(e) => write!(f, "Error writing csv file: {}", e),
            Self::Http(e) => write!(f, "Index Herbariorum HTTP error: {}", e),
            Self::Json(e) => write!(f, "Index Herbariorum JSON parse error: {}", e),
            Self::InvalidBaseUrl(url) => write!(f, "Invalid base URL: {}", url),
        }
    }
}

impl std::error::Error for IndexHerbariorumError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for IndexHerbariorumError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

impl From<serde_json::Error> for IndexHerbariorumError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<std::io::Error> for IndexHerbariorumError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Result type for Index Herbariorum API operations
pub type Result<T> = std::result::Result<T, IndexHerbariorumError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_status_error_display() {
        let err = IndexHerbariorumError::Status(404);
        assert_eq!(format!("{}", err), "HTTP error: 404");
        assert_eq!(err.status(), Some(404));
        assert!(err.is_request_error());
    }

    #[test]
    fn test_invalid_resource_is_request_error() {
        let err = IndexHerbariorumError::InvalidResource("countries".to_string());
        assert!(err.is_request_error());
        assert_eq!(err.status(), None);
        assert_eq!(format!("{}", err), "Invalid resource name: countries");
    }

    #[test]
    fn test_invalid_parameter_is_not_request_error() {
        let err = IndexHerbariorumError::InvalidParameter("download".to_string());
        assert!(!err.is_request_error());
        assert!(format!("{}", err).contains("'download' key not allowed"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err = IndexHerbariorumError::from(io);
        assert!(matches!(err, IndexHerbariorumError::Io(_)));
        assert_eq!(err.source().map(|s| s.to_string()), Some("read-only".to_string()));
    }
}
