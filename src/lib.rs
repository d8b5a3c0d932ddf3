// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! # formcurl - Minimal GET/POST helper
//!
//! A thin blocking layer over `reqwest` for form-style HTTP exchanges.
//!
//! ## Features
//!
//! - URL normalization: default scheme, query string lifted into parameters
//! - Form encoding for query strings and POST bodies
//! - Shared default headers and cookies, overridable per request
//! - Single-shot capture of body, headers and cookies
//! - Pluggable transport for tests or custom clients
//!
//! No retries, no streaming, no timeouts: one call is one blocking
//! request and the whole body is buffered in memory.
//!
//! ## Example
//!
//! ```rust,no_run
//! use formcurl::{FormValues, Session};
//!
//! fn main() -> formcurl::Result<()> {
//!     let session = Session::new()?;
//!
//!     let page = session.get("example.com/search?q=rust")?;
//!     println!("{}", page.response().body);
//!
//!     let body = FormValues::from([("user", "alice")]);
//!     let mut login = session.client("https://example.com/login", "POST", body)?;
//!     let response = login.send()?;
//!     println!("status: {:?}", response.status_code());
//!
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod curl;
pub mod error;
pub mod http;
pub mod session;

pub use config::RequestDefaults;
pub use curl::{Curl, RequestState};
pub use error::{Error, Result};
pub use http::{Cookie, FormValues, RequestInfo, ResponseInfo, Transport};
pub use session::Session;

/// formcurl version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build and send a GET request with default settings
pub fn get(uri: &str) -> Result<Curl> {
    Session::new()?.get(uri)
}

/// Build and send a POST request with default settings
pub fn post(uri: &str, body: FormValues) -> Result<Curl> {
    Session::new()?.post(uri, body)
}

/// Build an unsent handle with default settings
pub fn client(uri: &str, method: &str, body: FormValues) -> Result<Curl> {
    Session::new()?.client(uri, method, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convenience_validation() {
        assert!(matches!(get(""), Err(Error::EmptyUrl)));
        assert!(matches!(post("", FormValues::new()), Err(Error::EmptyUrl)));
        assert!(matches!(
            client("http://example.com/", "DELETE", FormValues::new()),
            Err(Error::Method(_))
        ));
    }

    #[test]
    fn test_client_is_unsent() {
        let curl = client("example.com/?a=1", "GET", FormValues::new()).unwrap();
        assert_eq!(curl.state(), RequestState::Built);
        assert_eq!(curl.uri().as_str(), "http://example.com/");
    }
}
