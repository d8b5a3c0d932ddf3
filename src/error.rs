// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for formcurl
//!
//! Every error is returned to the caller and also cached on the request
//! handle, so the type is `Clone`: foreign error sources are shared behind
//! an `Arc` instead of being moved.

use std::sync::Arc;

use thiserror::Error;

/// Boxed error source shared between the caller and the handle
pub type SharedSource = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Result type alias for formcurl operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for formcurl
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// The URL string was empty
    #[error("Url error: empty URL")]
    EmptyUrl,

    /// The URL string is not a syntactically valid URL
    #[error("Invalid URL '{url}': {source}")]
    Parse {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Only GET and POST are supported
    #[error("Unsupported method '{0}': only GET and POST are supported")]
    Method(String),

    /// The handle has no request attached
    #[error("Request handle has no request attached")]
    MissingRequest,

    /// Network or client failure while issuing the request
    #[error("Transport error for {url}: {source}")]
    Transport {
        url: String,
        #[source]
        source: SharedSource,
    },

    /// Headers were received but the body could not be drained
    #[error("Failed to read response body from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: SharedSource,
    },

    /// Captured body could not be decoded
    #[error("Decode error: {0}")]
    Decode(#[source] Arc<serde_json::Error>),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a parse error for the given input
    pub fn parse(url: impl Into<String>, source: url::ParseError) -> Self {
        Error::Parse {
            url: url.into(),
            source,
        }
    }

    /// Create a transport error
    pub fn transport<E>(url: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Error::Transport {
            url: url.into(),
            source: Arc::from(source.into()),
        }
    }

    /// Create a body read error
    pub fn body_read<E>(url: impl Into<String>, source: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync + 'static>>,
    {
        Error::BodyRead {
            url: url.into(),
            source: Arc::from(source.into()),
        }
    }

    /// Create a configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }

    /// Check if this is a URL error (empty or malformed)
    pub fn is_url(&self) -> bool {
        matches!(self, Error::EmptyUrl | Error::Parse { .. })
    }

    /// Check if the failure happened on the wire
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport { .. } | Error::BodyRead { .. })
    }

    /// Get URL if available
    pub fn url(&self) -> Option<&str> {
        match self {
            Error::Parse { url, .. } => Some(url),
            Error::Transport { url, .. } => Some(url),
            Error::BodyRead { url, .. } => Some(url),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Decode(Arc::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_errors() {
        assert!(Error::EmptyUrl.is_url());

        let err = Error::parse("http://[::1", url::ParseError::InvalidIpv6Address);
        assert!(err.is_url());
        assert!(!err.is_transport());
        assert_eq!(err.url(), Some("http://[::1"));
    }

    #[test]
    fn test_transport_error_clone_shares_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = Error::transport("http://127.0.0.1:1/", io);
        let cached = err.clone();

        assert!(err.is_transport());
        assert_eq!(err.to_string(), cached.to_string());
        match (&err, &cached) {
            (Error::Transport { source: a, .. }, Error::Transport { source: b, .. }) => {
                assert!(Arc::ptr_eq(a, b));
            }
            _ => panic!("Expected Transport"),
        }
    }

    #[test]
    fn test_method_error_message() {
        let err = Error::Method("DELETE".to_string());
        assert!(err.to_string().contains("DELETE"));
        assert_eq!(err.url(), None);
    }
}
