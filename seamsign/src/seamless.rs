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

//! Seamless Docs service support with convenience APIs

// Re-export all Seamless Docs signing types
pub use seamsign_seamless_docs::*;

use crate::{default_context, Signer};

/// Default Seamless Docs Signer type with commonly used components
pub type DefaultSigner = Signer<Credential>;

/// Create a default Seamless Docs signer with standard configuration
///
/// This function creates a signer with:
/// - Default context (OS environment, system clock, RustCrypto HMAC)
/// - Default credential provider (reads `SEAMLESS_SECRET_KEY`)
/// - Seamless Docs request signer
pub fn default_signer() -> DefaultSigner {
    let ctx = default_context();
    let provider = DefaultCredentialProvider::new();
    Signer::new(ctx, provider, RequestSigner::new())
}

/// Create a Seamless Docs signer for a secret supplied by the caller.
pub fn signer_with_secret(secret_key: impl Into<String>) -> DefaultSigner {
    let ctx = default_context();
    let provider = StaticCredentialProvider::new(secret_key);
    Signer::new(ctx, provider, RequestSigner::new())
}
