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

use std::str::FromStr;
use std::sync::Arc;

use http::uri::PathAndQuery;
use http::Uri;
use log::debug;

use crate::{Context, ProvideCredential, Result, SignRequest, SigningCredential, SigningRequest};

/// Signer is the main struct used to sign the request.
///
/// Credentials are loaded on every call and never kept, so a rotated secret
/// takes effect on the next signature.
#[derive(Clone, Debug)]
pub struct Signer<C: SigningCredential> {
    ctx: Context,
    loader: Arc<dyn ProvideCredential<Credential = C>>,
    builder: Arc<dyn SignRequest<Credential = C>>,
}

impl<C: SigningCredential> Signer<C> {
    /// Create a new signer.
    pub fn new(
        ctx: Context,
        loader: impl ProvideCredential<Credential = C>,
        builder: impl SignRequest<Credential = C>,
    ) -> Self {
        Self {
            ctx,
            loader: Arc::new(loader),
            builder: Arc::new(builder),
        }
    }

    /// Compute the transport-safe signature for the request.
    pub fn evaluate(&self, req: &SigningRequest) -> Result<String> {
        let credential = self
            .loader
            .provide_credential(&self.ctx)?
            .filter(|c| c.is_valid());
        if credential.is_none() {
            debug!("no valid credential found for {} {}", req.method, req.url);
        }

        self.builder
            .sign_request(&self.ctx, req, credential.as_ref())
    }

    /// Signing request.
    ///
    /// The signature is appended to the request query under the builder's
    /// [`SignRequest::signature_param`].
    pub fn sign(&self, parts: &mut http::request::Parts) -> Result<()> {
        let req = SigningRequest::build(parts);
        let signature = self.evaluate(&req)?;

        parts.uri = query_push(&parts.uri, self.builder.signature_param(), &signature)?;
        Ok(())
    }
}

/// Append `key=value` to the query of `uri`.
///
/// `value` must already be percent encoded.
fn query_push(uri: &Uri, key: &str, value: &str) -> Result<Uri> {
    let mut uri_parts = uri.clone().into_parts();

    let paq = match &uri_parts.path_and_query {
        Some(paq) => match paq.query() {
            Some(query) if !query.is_empty() => {
                format!("{}?{query}&{key}={value}", paq.path())
            }
            _ => format!("{}?{key}={value}", paq.path()),
        },
        None => format!("/?{key}={value}"),
    };
    uri_parts.path_and_query = Some(PathAndQuery::from_str(&paq)?);

    Ok(Uri::from_parts(uri_parts)?)
}
