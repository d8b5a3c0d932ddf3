// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request defaults shared by every handle built from a session

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::http::{headers, Cookie, DEFAULT_CONTENT_TYPE, DEFAULT_SCHEME};

/// Defaults applied to every request unless the handle overrides them
///
/// Built once at start-up and read by every constructor. Each handle gets
/// its own copy of the headers and cookies, so per-request overrides never
/// leak back into the shared set.
#[derive(Debug, Clone)]
pub struct RequestDefaults {
    /// Scheme for URLs given without one
    pub default_scheme: String,
    /// Headers attached to every request
    pub default_headers: HeaderMap,
    /// Cookies attached to every request
    pub default_cookies: Vec<Cookie>,
}

impl Default for RequestDefaults {
    fn default() -> Self {
        let mut default_headers = HeaderMap::new();
        default_headers.insert(
            HeaderName::from_static(headers::CONTENT_TYPE),
            HeaderValue::from_static(DEFAULT_CONTENT_TYPE),
        );

        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            default_headers,
            default_cookies: Vec::new(),
        }
    }
}

impl RequestDefaults {
    /// Create defaults with the standard content type and `http` scheme
    pub fn new() -> Self {
        Self::default()
    }

    /// Create defaults with no headers or cookies at all
    pub fn empty() -> Self {
        Self {
            default_scheme: DEFAULT_SCHEME.to_string(),
            default_headers: HeaderMap::new(),
            default_cookies: Vec::new(),
        }
    }

    /// Set default scheme
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.default_scheme = scheme.into();
        self
    }

    /// Add a default header value
    ///
    /// Invalid names or values are skipped with a warning.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        match (
            HeaderName::try_from(name.as_ref()),
            HeaderValue::try_from(value.as_ref()),
        ) {
            (Ok(name), Ok(value)) => {
                self.default_headers.append(name, value);
            }
            _ => tracing::warn!(
                name = name.as_ref(),
                "Ignoring invalid default header"
            ),
        }
        self
    }

    /// Drop a default header
    pub fn without_header(mut self, name: impl AsRef<str>) -> Self {
        self.default_headers.remove(name.as_ref());
        self
    }

    /// Add a default cookie
    pub fn cookie(mut self, cookie: Cookie) -> Self {
        self.default_cookies.push(cookie);
        self
    }
}
