// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP response types

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;

use super::cookie::Cookie;
use super::headers;
use crate::error::Result;

/// Response as returned by a transport, body fully buffered
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// Response status code
    pub status: StatusCode,
    /// Response headers as received
    pub headers: HeaderMap,
    /// Final URL (after redirects)
    pub url: Url,
    /// Fully buffered body
    pub body: Bytes,
}

/// Captured result of the last successful send
///
/// Empty until a request completes.
#[derive(Debug, Clone, Default)]
pub struct ResponseInfo {
    /// Response status code
    pub status: Option<StatusCode>,
    /// Response body as text
    pub body: String,
    /// Response headers
    pub headers: HeaderMap,
    /// Cookies parsed from Set-Cookie headers
    pub cookies: Vec<Cookie>,
    /// Final URL (after redirects)
    pub url: Option<Url>,
    /// Time from dispatch to fully buffered body
    pub elapsed: Option<Duration>,
}

impl ResponseInfo {
    /// Capture a raw response
    pub fn from_raw(raw: RawResponse, elapsed: Duration) -> Self {
        let cookies = raw
            .headers
            .get_all(headers::SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(|v| Cookie::parse(v, &raw.url))
            .collect();

        Self {
            status: Some(raw.status),
            body: String::from_utf8_lossy(&raw.body).into_owned(),
            headers: raw.headers,
            cookies,
            url: Some(raw.url),
            elapsed: Some(elapsed),
        }
    }

    /// Whether a response has been captured
    pub fn is_received(&self) -> bool {
        self.status.is_some()
    }

    /// Check if status is success (2xx)
    pub fn is_success(&self) -> bool {
        self.status.map_or(false, |s| s.is_success())
    }

    /// Get status code as u16
    pub fn status_code(&self) -> Option<u16> {
        self.status.map(|s| s.as_u16())
    }

    /// Get body as text
    pub fn text(&self) -> &str {
        &self.body
    }

    /// Parse body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Get all values for a header
    pub fn header_all(&self, name: &str) -> Vec<&str> {
        self.headers
            .get_all(name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .collect()
    }

    /// Get content type
    pub fn content_type(&self) -> Option<&str> {
        self.header(headers::CONTENT_TYPE)
    }

    /// Find a captured cookie by name
    pub fn cookie(&self, name: &str) -> Option<&Cookie> {
        self.cookies.iter().find(|c| c.name == name)
    }
}
