// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Request handle
//!
//! A [`Curl`] is one request/response exchange: the normalized target, the
//! method, the caller's [`RequestInfo`] and the captured [`ResponseInfo`].
//! It can be sent any number of times; every send issues an independent
//! request and replaces the captured response.

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderName, HeaderValue};
use reqwest::Method;
use url::Url;

use crate::config::RequestDefaults;
use crate::error::{Error, Result};
use crate::http::{
    combine_url, normalize_url, parse_method, Cookie, FormValues, RequestInfo, ResponseInfo,
    Transport,
};

/// Lifecycle of a handle: `Built -> Sent -> Succeeded | Failed`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestState {
    /// Constructed, never sent
    Built,
    /// Request handed to the transport
    Sent,
    /// Last send completed and the response was captured
    Succeeded,
    /// Last send failed; see [`Curl::last_error`]
    Failed,
}

/// Mutable handle for one request/response exchange
pub struct Curl {
    uri: Url,
    method: Method,
    request: Option<RequestInfo>,
    response: ResponseInfo,
    state: RequestState,
    last_error: Option<Error>,
    transport: Arc<dyn Transport>,
}

impl Curl {
    /// Build an unsent handle
    ///
    /// `method` must be exactly `"GET"` or `"POST"`. The query string of
    /// `uri` is moved into the request's query parameters; default headers
    /// and cookies are copied from `defaults`.
    pub fn build(
        defaults: &RequestDefaults,
        transport: Arc<dyn Transport>,
        uri: &str,
        method: &str,
        body: FormValues,
    ) -> Result<Self> {
        if uri.trim().is_empty() {
            return Err(Error::EmptyUrl);
        }
        let method = parse_method(method)?;
        let normalized = normalize_url(uri, &defaults.default_scheme)?;

        Ok(Self {
            uri: normalized.uri,
            method,
            request: Some(RequestInfo {
                query: normalized.query,
                body,
                headers: defaults.default_headers.clone(),
                cookies: defaults.default_cookies.clone(),
            }),
            response: ResponseInfo::default(),
            state: RequestState::Built,
            last_error: None,
            transport,
        })
    }

    /// Issue the request and capture the response
    ///
    /// Errors are cached on the handle as well as returned. The captured
    /// response is cleared when a send fails.
    pub fn send(&mut self) -> Result<&ResponseInfo> {
        let outgoing = match &self.request {
            Some(request) => request.to_outgoing(&self.method, &self.uri),
            None => return Err(self.fail(Error::MissingRequest)),
        };

        tracing::info!(method = %outgoing.method, url = %outgoing.url, "Sending request");
        self.state = RequestState::Sent;

        let start = Instant::now();
        match self.transport.send(&outgoing) {
            Ok(raw) => {
                self.response = ResponseInfo::from_raw(raw, start.elapsed());
                self.state = RequestState::Succeeded;
                self.last_error = None;
                tracing::debug!(
                    status = ?self.response.status_code(),
                    elapsed_ms = start.elapsed().as_millis() as u64,
                    body_len = self.response.body.len(),
                    "Request completed"
                );
                Ok(&self.response)
            }
            Err(err) => {
                tracing::warn!(url = %outgoing.url, error = %err, "Request failed");
                Err(self.fail(err))
            }
        }
    }

    /// Alias of [`Curl::send`]
    pub fn do_request(&mut self) -> Result<&ResponseInfo> {
        self.send()
    }

    fn fail(&mut self, err: Error) -> Error {
        self.response = ResponseInfo::default();
        self.state = RequestState::Failed;
        self.last_error = Some(err.clone());
        err
    }

    /// Set a header, replacing any default value
    ///
    /// Fails with [`Error::MissingRequest`] once the request was detached.
    pub fn header(mut self, name: impl AsRef<str>, value: impl AsRef<str>) -> Result<Self> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| Error::config(format!("Invalid header name: {}", e)))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| Error::config(format!("Invalid header value: {}", e)))?;
        let request = self.request.as_mut().ok_or(Error::MissingRequest)?;
        request.headers.insert(name, value);
        Ok(self)
    }

    /// Add a cookie; no-op once the request was detached
    pub fn cookie(mut self, cookie: Cookie) -> Self {
        if let Some(request) = self.request.as_mut() {
            request.cookies.push(cookie);
        }
        self
    }

    /// Add a query parameter; no-op once the request was detached
    pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        if let Some(request) = self.request.as_mut() {
            request.query.add(key, value);
        }
        self
    }

    /// Stored target: scheme, host and path, never a query
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    /// HTTP method, GET or POST
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// URL the next send will hit, query included
    pub fn final_url(&self) -> Url {
        match &self.request {
            Some(request) => combine_url(&self.uri, &request.query),
            None => self.uri.clone(),
        }
    }

    /// Attached request, if any
    pub fn request(&self) -> Option<&RequestInfo> {
        self.request.as_ref()
    }

    /// Mutable access to the attached request
    pub fn request_mut(&mut self) -> Option<&mut RequestInfo> {
        self.request.as_mut()
    }

    /// Detach the request; a later send fails with [`Error::MissingRequest`]
    pub fn take_request(&mut self) -> Option<RequestInfo> {
        self.request.take()
    }

    /// Attach a request, replacing any current one
    pub fn set_request(&mut self, request: RequestInfo) {
        self.request = Some(request);
    }

    /// Response captured by the last successful send
    pub fn response(&self) -> &ResponseInfo {
        &self.response
    }

    /// Current lifecycle state
    pub fn state(&self) -> RequestState {
        self.state
    }

    /// Error from the last failed send, cleared on success
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }
}

impl fmt::Debug for Curl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Curl")
            .field("uri", &self.uri.as_str())
            .field("method", &self.method)
            .field("request", &self.request)
            .field("response", &self.response)
            .field("state", &self.state)
            .field("last_error", &self.last_error)
            .finish_non_exhaustive()
    }
}
