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

//! Seamless Docs request signing.

use std::fmt::Write;

use log::debug;
use seamsign_core::hash::{DigestEncoding, HmacAlgorithm};
use seamsign_core::utils::percent_encode_component;
use seamsign_core::{Context, Error, ErrorKind, Result, SignRequest, SigningRequest};

use crate::constants::{SIGNATURE_PARAM, TIMESTAMP_FORMAT};
use crate::credential::Credential;

/// RequestSigner that implements Seamless Docs request signing.
///
/// - [Signing Requests](http://developers.seamlessdocs.com/v1.2/docs/signing-requests)
#[derive(Debug, Default)]
pub struct RequestSigner;

impl RequestSigner {
    /// Create a new request signer.
    pub fn new() -> Self {
        Self
    }
}

impl SignRequest for RequestSigner {
    type Credential = Credential;

    fn sign_request(
        &self,
        ctx: &Context,
        req: &SigningRequest,
        credential: Option<&Self::Credential>,
    ) -> Result<String> {
        let cred = credential.ok_or_else(|| Error::signing_failure("missing secret key"))?;

        evaluate(ctx, req, &cred.secret_key)
    }

    fn signature_param(&self) -> &str {
        SIGNATURE_PARAM
    }
}

/// Compute the signature of `req` at the current time.
///
/// A fresh timestamp is taken from the context on every call, so two calls at
/// different instants produce different signatures.
pub fn evaluate(ctx: &Context, req: &SigningRequest, secret: &str) -> Result<String> {
    let timestamp = ctx.generate_timestamp(TIMESTAMP_FORMAT).map_err(|e| {
        ensure_kind(
            e,
            ErrorKind::TimestampUnavailable,
            "failed to generate timestamp",
        )
    })?;

    let string_to_sign = build_string_to_sign(&req.method, &req.url, &timestamp)?;
    sign(ctx, &string_to_sign, secret)
}

/// Construct string to sign
///
/// ## Format
///
/// ```text
/// HTTPVerb + "+" +
/// HTTPRequestURI + "+" +
/// Timestamp
/// ```
///
/// `HTTPRequestURI` is the path of the url up to, but not including, the
/// query string. Relative urls are accepted. An empty path is replaced by `/`.
pub fn build_string_to_sign(method: &str, url: &str, timestamp: &str) -> Result<String> {
    if method.is_empty() {
        return Err(Error::request_invalid("http method must not be empty"));
    }
    let path = SigningRequest::new(method, url).path()?;

    let mut s = String::with_capacity(method.len() + path.len() + timestamp.len() + 2);
    write!(&mut s, "{method}+{path}+{timestamp}")?;

    debug!("string to sign: {}", &s);
    Ok(s)
}

/// Sign `string_to_sign` with `secret`.
///
/// The digest is HMAC-SHA256 in lowercase hex, percent encoded so it can be
/// used as a query or form value as is.
pub fn sign(ctx: &Context, string_to_sign: &str, secret: &str) -> Result<String> {
    let digest = ctx
        .compute_hmac(
            string_to_sign.as_bytes(),
            secret.as_bytes(),
            HmacAlgorithm::Sha256,
            false,
            DigestEncoding::Hexadecimal,
        )
        .map_err(|e| ensure_kind(e, ErrorKind::SigningFailure, "failed to compute hmac"))?;

    Ok(percent_encode_component(&digest))
}

/// Errors from injected services keep their kind when it already matches,
/// otherwise they are wrapped into `kind`.
fn ensure_kind(err: Error, kind: ErrorKind, message: &str) -> Error {
    if err.kind() == kind {
        err
    } else {
        Error::new(kind, message).with_source(err)
    }
}
