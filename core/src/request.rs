// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use url::Url;

use crate::{Error, Result};

/// Relative references are resolved against this url. Only its root path
/// can leak into the result, and that is the same `/` an empty path gets.
const RELATIVE_BASE: &str = "http://relative.invalid/";

/// Signing context for request.
///
/// Only the method and the url take part in the signature, so the request is
/// kept as two plain strings. The method is used verbatim: no case
/// normalization or verb validation happens here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    /// HTTP method.
    pub method: String,
    /// Absolute or relative request url.
    pub url: String,
}

impl SigningRequest {
    /// Create a signing request from method and url.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
        }
    }

    /// Build a signing request from http::request::Parts.
    pub fn build(parts: &http::request::Parts) -> Self {
        Self {
            method: parts.method.as_str().to_string(),
            url: parts.uri.to_string(),
        }
    }

    /// Get the path of the url.
    ///
    /// The url is read as an RFC 3986 URI reference, absolute or relative.
    /// Scheme, authority, query and fragment are dropped and dot segments are
    /// removed. An empty path is normalized to `/`.
    ///
    /// Returns [`crate::ErrorKind::MalformedUrl`] if the url can't be parsed.
    pub fn path(&self) -> Result<String> {
        let url = self.url.as_str();
        if url.is_empty() {
            return Err(Error::malformed_url("url must not be empty"));
        }
        if let Some(c) = url.chars().find(|c| !is_uri_char(*c)) {
            return Err(Error::malformed_url(format!(
                "invalid character {c:?} in url {url:?}"
            )));
        }
        if !has_valid_percent_encoding(url) {
            return Err(Error::malformed_url(format!(
                "invalid percent encoding in url {url:?}"
            )));
        }

        let parsed = match scheme_of(url) {
            Some(scheme) if !is_valid_scheme(scheme) => {
                return Err(Error::malformed_url(format!(
                    "invalid scheme {scheme:?} in url {url:?}"
                )));
            }
            Some(_) => Url::parse(url),
            None => Url::parse(RELATIVE_BASE).and_then(|base| base.join(url)),
        }
        .map_err(|e| Error::malformed_url(format!("invalid url {url:?}")).with_source(e))?;

        let path = parsed.path();
        if path.is_empty() {
            Ok("/".to_string())
        } else {
            Ok(path.to_string())
        }
    }
}

/// Characters allowed anywhere in a URI reference: unreserved, reserved and `%`.
fn is_uri_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || "-._~:/?#[]@!$&'()*+,;=%".contains(c)
}

fn has_valid_percent_encoding(url: &str) -> bool {
    let bytes = url.as_bytes();
    url.match_indices('%').all(|(i, _)| {
        bytes
            .get(i + 1..i + 3)
            .is_some_and(|hex| hex.iter().all(u8::is_ascii_hexdigit))
    })
}

/// Returns the scheme if `url` has one.
///
/// A `:` before any of `/`, `?` or `#` ends the scheme; otherwise the url is
/// a relative reference.
fn scheme_of(url: &str) -> Option<&str> {
    let end = url.find([':', '/', '?', '#'])?;
    (url.as_bytes()[end] == b':').then(|| &url[..end])
}

/// `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
