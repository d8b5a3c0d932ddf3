// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Session: request defaults plus the transport handles are sent through

use std::sync::Arc;

use crate::config::RequestDefaults;
use crate::curl::Curl;
use crate::error::Result;
use crate::http::{FormValues, ReqwestTransport, Transport};

/// Entry point for building request handles
///
/// `get` and `post` build and send in one step; `client` only builds and
/// leaves the send to the caller.
#[derive(Clone)]
pub struct Session {
    defaults: RequestDefaults,
    transport: Arc<dyn Transport>,
}

impl Session {
    /// Create a session with default settings over reqwest
    pub fn new() -> Result<Self> {
        Self::with_defaults(RequestDefaults::default())
    }

    /// Create a session with custom defaults over reqwest
    pub fn with_defaults(defaults: RequestDefaults) -> Result<Self> {
        Ok(Self::with_transport(defaults, ReqwestTransport::new()?))
    }

    /// Create a session over a caller-supplied transport
    pub fn with_transport(defaults: RequestDefaults, transport: impl Transport + 'static) -> Self {
        Self {
            defaults,
            transport: Arc::new(transport),
        }
    }

    /// Get the request defaults
    pub fn defaults(&self) -> &RequestDefaults {
        &self.defaults
    }

    /// Build and send a GET request
    pub fn get(&self, uri: &str) -> Result<Curl> {
        self.build_and_send(uri, "GET", FormValues::new())
    }

    /// Build and send a POST request with a form body
    pub fn post(&self, uri: &str, body: FormValues) -> Result<Curl> {
        self.build_and_send(uri, "POST", body)
    }

    /// Build an unsent handle; `method` must be `"GET"` or `"POST"`
    pub fn client(&self, uri: &str, method: &str, body: FormValues) -> Result<Curl> {
        Curl::build(&self.defaults, self.transport.clone(), uri, method, body)
    }

    fn build_and_send(&self, uri: &str, method: &str, body: FormValues) -> Result<Curl> {
        let mut curl = self.client(uri, method, body)?;
        curl.send()?;
        Ok(curl)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("defaults", &self.defaults)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::curl::RequestState;
    use crate::error::Error;
    use crate::http::{OutgoingRequest, RawResponse};
    use bytes::Bytes;
    use reqwest::header::HeaderMap;
    use reqwest::StatusCode;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    struct Echo;

    impl Transport for Echo {
        fn send(&self, request: &OutgoingRequest) -> Result<RawResponse> {
            Ok(RawResponse {
                status: StatusCode::OK,
                headers: HeaderMap::new(),
                url: request.url.clone(),
                body: Bytes::from(format!("{} {}", request.method, request.url)),
            })
        }
    }

    fn session() -> Session {
        Session::with_transport(RequestDefaults::default(), Echo)
    }

    #[test]
    fn test_get_and_post_send_immediately() {
        let session = session();

        let get = session.get("example.com/a?x=1").unwrap();
        assert_eq!(get.state(), RequestState::Succeeded);
        assert_eq!(get.response().body, "GET http://example.com/a?x=1");

        let post = session
            .post("http://example.com/b", FormValues::from([("k", "v")]))
            .unwrap();
        assert_eq!(post.state(), RequestState::Succeeded);
        assert_eq!(post.response().body, "POST http://example.com/b");
    }

    #[test]
    fn test_client_builds_only() {
        let mut curl = session()
            .client("http://example.com/c", "POST", FormValues::new())
            .unwrap();
        assert_eq!(curl.state(), RequestState::Built);
        assert!(!curl.response().is_received());

        curl.send().unwrap();
        assert_eq!(curl.state(), RequestState::Succeeded);
    }

    #[test]
    fn test_empty_url_rejected_everywhere() {
        let session = session();
        let body = FormValues::from([("a", "b")]);

        assert!(matches!(session.get(""), Err(Error::EmptyUrl)));
        assert!(matches!(session.post("", body.clone()), Err(Error::EmptyUrl)));
        assert!(matches!(session.client("", "GET", body), Err(Error::EmptyUrl)));
    }

    #[test]
    fn test_client_rejects_other_methods() {
        let session = session();
        for m in ["DELETE", "PUT", "PATCH", "HEAD"] {
            assert!(matches!(
                session.client("http://example.com/", m, FormValues::new()),
                Err(Error::Method(_))
            ));
        }
    }

    #[test]
    fn test_get_connection_refused() {
        let session = Session::new().unwrap();
        let err = session.get("http://127.0.0.1:1/").unwrap_err();
        assert!(matches!(err, Error::Transport { .. }));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_post_against_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/login"))
            .and(query_param("next", "/home"))
            .and(header(
                "content-type",
                "application/x-www-form-urlencoded; param=value",
            ))
            .and(header("cookie", "lang=en"))
            .and(body_string("pass=p%26w&user=alice"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("set-cookie", "session=s3cr3t; Path=/; HttpOnly")
                    .set_body_string("welcome"),
            )
            .expect(2)
            .mount(&server)
            .await;

        let uri = format!("{}/login?next=/home", server.uri());
        let (first, second) = tokio::task::spawn_blocking(move || {
            let defaults = RequestDefaults::new().cookie(crate::http::Cookie::new("lang", "en"));
            let session = Session::with_defaults(defaults).unwrap();
            let body = FormValues::from([("user", "alice"), ("pass", "p&w")]);
            let mut curl = session.post(&uri, body).unwrap();
            let first = curl.response().clone();
            let second = curl.send().unwrap().clone();
            (first, second)
        })
        .await
        .unwrap();

        for response in [&first, &second] {
            assert_eq!(response.status_code(), Some(200));
            assert_eq!(response.body, "welcome");
            let cookie = response.cookie("session").unwrap();
            assert_eq!(cookie.value, "s3cr3t");
            assert!(cookie.http_only);
        }
    }
}
