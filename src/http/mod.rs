// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! HTTP building blocks for formcurl
//!
//! URL normalization, form encoding, cookies, the request/response
//! records and the transport seam a handle sends through.

mod client;
mod cookie;
mod normalize;
mod request;
mod response;
mod transport;
mod values;

pub use client::ReqwestTransport;
#[cfg(test)]
pub(crate) use client::serve_truncated_body;
pub use cookie::{cookie_header, Cookie, SameSite};
pub use normalize::{combine_url, normalize_url, NormalizedUrl};
pub use request::{parse_method, OutgoingRequest, RequestInfo};
pub use response::{RawResponse, ResponseInfo};
pub use transport::Transport;
pub use values::FormValues;

/// Scheme used when a URL does not carry one
pub const DEFAULT_SCHEME: &str = "http";

/// Content type sent unless the caller overrides it
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded; param=value";

/// Common HTTP headers
pub mod headers {
    pub const CONTENT_TYPE: &str = "content-type";
    pub const COOKIE: &str = "cookie";
    pub const SET_COOKIE: &str = "set-cookie";
}
