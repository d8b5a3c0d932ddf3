// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Transport trait - the HTTP client a handle sends through
//!
//! One call is one blocking request/response exchange. Implementations
//! must fully buffer the body before returning, and must release the
//! underlying connection on every exit path.
//!
//! # Example
//!
//! ```rust
//! use bytes::Bytes;
//! use formcurl::http::{OutgoingRequest, RawResponse, Transport};
//! use reqwest::header::HeaderMap;
//! use reqwest::StatusCode;
//!
//! struct Canned;
//!
//! impl Transport for Canned {
//!     fn send(&self, request: &OutgoingRequest) -> formcurl::Result<RawResponse> {
//!         Ok(RawResponse {
//!             status: StatusCode::OK,
//!             headers: HeaderMap::new(),
//!             url: request.url.clone(),
//!             body: Bytes::from_static(b"hello"),
//!         })
//!     }
//! }
//! ```

use std::sync::Arc;

use super::request::OutgoingRequest;
use super::response::RawResponse;
use crate::error::Result;

/// Synchronous HTTP exchange
pub trait Transport: Send + Sync {
    /// Send `request` and return the buffered response
    ///
    /// Network failures map to [`Error::Transport`](crate::Error::Transport),
    /// failures while draining the body to
    /// [`Error::BodyRead`](crate::Error::BodyRead).
    fn send(&self, request: &OutgoingRequest) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &OutgoingRequest) -> Result<RawResponse> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &OutgoingRequest) -> Result<RawResponse> {
        (**self).send(request)
    }
}
