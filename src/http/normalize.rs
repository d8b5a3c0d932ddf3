// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! URL normalization
//!
//! A handle stores its target as scheme + host + path only. The query string
//! is split off into a [`FormValues`] mapping at construction and merged back
//! by [`combine_url`] right before the request goes out.

use std::borrow::Cow;

use url::Url;

use super::values::FormValues;
use crate::error::{Error, Result};

/// A URL with its query string lifted out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    /// Scheme, host (with port) and path; never carries a query
    pub uri: Url,
    /// Parameters parsed from the original query string
    pub query: FormValues,
}

/// Parse `raw`, default its scheme and split off the query string
///
/// Userinfo and fragment are dropped along with the query.
pub fn normalize_url(raw: &str, default_scheme: &str) -> Result<NormalizedUrl> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(Error::EmptyUrl);
    }

    let candidate = if has_scheme(raw) {
        Cow::Borrowed(raw)
    } else {
        Cow::Owned(format!(
            "{}://{}",
            default_scheme,
            raw.trim_start_matches("//")
        ))
    };

    let mut url = Url::parse(&candidate).map_err(|e| Error::parse(raw, e))?;
    if url.cannot_be_a_base() || url.host_str().map_or(true, str::is_empty) {
        return Err(Error::parse(raw, url::ParseError::EmptyHost));
    }

    let query = url.query().map(FormValues::parse).unwrap_or_default();

    url.set_query(None);
    url.set_fragment(None);
    // Only fails for URLs without a host, excluded above
    let _ = url.set_username("");
    let _ = url.set_password(None);

    Ok(NormalizedUrl { uri: url, query })
}

/// Merge `query` back onto `uri`; returns `uri` unchanged when empty
pub fn combine_url(uri: &Url, query: &FormValues) -> Url {
    let mut url = uri.clone();
    if !query.is_empty() {
        url.set_query(Some(&query.encode()));
    }
    url
}

/// `scheme://` prefix per RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
fn has_scheme(raw: &str) -> bool {
    let Some((scheme, _)) = raw.split_once("://") else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().map_or(false, |c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
