// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! reqwest-backed transport

use std::time::Duration;

use reqwest::blocking::Client;

use super::request::OutgoingRequest;
use super::response::RawResponse;
use super::transport::Transport;
use crate::error::{Error, Result};

/// Blocking HTTP transport over `reqwest`
///
/// No timeout is configured, so a call blocks until the server answers or
/// the connection fails.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with a fresh client
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(None::<Duration>)
            .cookie_store(false) // We handle cookies ourselves
            .build()
            .map_err(|e| Error::config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap a caller-configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Get the inner reqwest client
    pub fn inner(&self) -> &Client {
        &self.client
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &OutgoingRequest) -> Result<RawResponse> {
        let url = request.url.as_str();

        let mut builder = self
            .client
            .request(request.method.clone(), request.url.clone())
            .headers(request.headers.clone());

        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder.send().map_err(|e| Error::transport(url, e))?;

        let status = response.status();
        let headers = response.headers().clone();
        let final_url = response.url().clone();

        // Consumes the response, so the connection is released on both arms
        let body = response.bytes().map_err(|e| Error::body_read(url, e))?;

        Ok(RawResponse {
            status,
            headers,
            url: final_url,
            body,
        })
    }
}

/// Serve one connection that promises a 100-byte body and sends 7 bytes
#[cfg(test)]
pub(crate) fn serve_truncated_body() -> String {
    use std::io::{Read, Write};
    use std::net::TcpListener;

    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut buf = [0u8; 4096];
        let mut head = Vec::new();
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap_or(0);
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
        let _ = stream.write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100\r\n\r\npartial");
        let _ = stream.flush();
    });
    format!("http://{}/truncated", addr)
}
