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

//! Seamless Docs signing implementation for seamsign.
//!
//! This crate computes the `Signature` parameter required by the Seamless
//! Docs API.
//!
//! ## Overview
//!
//! Every request is signed over a string built from the method, the absolute
//! path of the url and the current timestamp:
//!
//! ```text
//! GET+/v1/docs/123+20240101T000000Z
//! ```
//!
//! The string is signed with HMAC-SHA256 keyed by the secret key, the digest
//! is hex encoded in lowercase and then percent encoded. Because the timestamp
//! is taken on every call, signatures change over time.
//!
//! ## Quick Start
//!
//! ```
//! use seamsign_core::{Context, Signer};
//! use seamsign_seamless_docs::{RequestSigner, StaticCredentialProvider};
//!
//! # fn main() -> seamsign_core::Result<()> {
//! let signer = Signer::new(
//!     Context::new(),
//!     StaticCredentialProvider::new("my-secret-key"),
//!     RequestSigner::new(),
//! );
//!
//! let mut parts = http::Request::get("https://api.seamlessdocs.com/api/account/verify")
//!     .body(())?
//!     .into_parts()
//!     .0;
//!
//! signer.sign(&mut parts)?;
//! assert!(parts.uri.query().unwrap_or_default().contains("Signature="));
//! # Ok(())
//! # }
//! ```
//!
//! ## Lower level API
//!
//! [`evaluate`] takes the secret directly, while [`build_string_to_sign`] and
//! [`sign`] expose the two steps separately.
//!
//! ## Credential Sources
//!
//! ```bash
//! export SEAMLESS_SECRET_KEY=your-secret-key
//! ```

mod constants;
pub use constants::{SEAMLESS_SECRET_KEY, SIGNATURE_PARAM, TIMESTAMP_FORMAT};

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;

mod descriptor;
pub use descriptor::{Descriptor, InputDescriptor, InputKind, DESCRIPTOR};

mod sign_request;
pub use sign_request::{build_string_to_sign, evaluate, sign, RequestSigner};

mod provide_credential;
pub use provide_credential::*;
