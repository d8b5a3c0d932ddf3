// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request-side types

use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use super::cookie::{cookie_header, Cookie};
use super::headers;
use super::normalize::combine_url;
use super::values::FormValues;
use crate::error::{Error, Result};

/// Everything the caller supplied for one request
#[derive(Debug, Clone, Default)]
pub struct RequestInfo {
    /// Query parameters, merged onto the URI at send time
    pub query: FormValues,
    /// Form body parameters
    pub body: FormValues,
    /// Request headers
    pub headers: HeaderMap,
    /// Cookies sent in the Cookie header
    pub cookies: Vec<Cookie>,
}

impl RequestInfo {
    /// Build the wire request for `method` against the normalized `uri`
    pub fn to_outgoing(&self, method: &Method, uri: &Url) -> OutgoingRequest {
        let mut headers = self.headers.clone();
        if !headers.contains_key(headers::COOKIE) {
            if let Some(value) = cookie_header(&self.cookies)
                .and_then(|v| HeaderValue::from_str(&v).ok())
            {
                headers.insert(HeaderName::from_static(headers::COOKIE), value);
            }
        }

        OutgoingRequest {
            method: method.clone(),
            url: combine_url(uri, &self.query),
            headers,
            body: Bytes::from(self.body.encode()),
        }
    }
}

/// A fully assembled request as handed to a transport
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    /// GET or POST
    pub method: Method,
    /// Final URL including the query string
    pub url: Url,
    /// Defaults plus per-request overrides, Cookie header included
    pub headers: HeaderMap,
    /// URL-encoded form payload; empty when there is no body
    pub body: Bytes,
}

impl OutgoingRequest {
    /// Get a header value
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Accept GET or POST only
pub fn parse_method(method: &str) -> Result<Method> {
    match method {
        "GET" => Ok(Method::GET),
        "POST" => Ok(Method::POST),
        other => Err(Error::Method(other.to_string())),
    }
}
