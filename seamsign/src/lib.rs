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

//! Signing Seamless Docs API requests without effort.
//!
//! This crate re-exports [`seamsign_core`] and the service crates behind
//! feature flags, plus convenience constructors wired with the defaults most
//! applications want.
//!
//! ## Example
//!
//! ```no_run
//! # fn main() -> seamsign::Result<()> {
//! // Reads the secret from SEAMLESS_SECRET_KEY.
//! let signer = seamsign::seamless::default_signer();
//!
//! let mut req = http::Request::get("https://api.seamlessdocs.com/api/account/verify")
//!     .body(())?
//!     .into_parts()
//!     .0;
//! signer.sign(&mut req)?;
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

pub use seamsign_core::*;

#[cfg(feature = "seamless")]
pub mod seamless;

/// Create a context that reads configuration from the process environment.
///
/// Timestamps come from the system clock and HMACs from the RustCrypto engine.
pub fn default_context() -> Context {
    Context::new().with_env(OsEnv)
}
