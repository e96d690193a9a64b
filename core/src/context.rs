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

use std::fmt::Debug;
use std::sync::Arc;

use crate::env::NoopEnv;
use crate::hash::{DigestEncoding, HmacAlgorithm, HmacEngine, RustCryptoHmac};
use crate::time::{SystemTimestamp, TimestampFormat, TimestampSource};
use crate::{Env, Result};

/// Context provides the services a signer calls out to.
///
/// ## Important
///
/// The environment defaults to a no-op implementation that holds no variables;
/// configure [`crate::OsEnv`] explicitly if configuration should come from the
/// process. The timestamp source defaults to [`SystemTimestamp`] and the HMAC
/// engine to [`RustCryptoHmac`].
///
/// ## Example
///
/// ```
/// use seamsign_core::time::{FixedTimestamp, TimestampFormat};
/// use seamsign_core::{Context, OsEnv};
///
/// let ctx = Context::new()
///     .with_env(OsEnv)
///     .with_timestamp_source(FixedTimestamp::new(chrono::Utc::now()));
///
/// let ts = ctx.generate_timestamp(TimestampFormat::ISO8601).unwrap();
/// assert!(ts.ends_with('Z'));
/// ```
#[derive(Clone)]
pub struct Context {
    env: Arc<dyn Env>,
    clock: Arc<dyn TimestampSource>,
    hmac: Arc<dyn HmacEngine>,
}

impl Debug for Context {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Context")
            .field("env", &self.env)
            .field("clock", &self.clock)
            .field("hmac", &self.hmac)
            .finish()
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Create a new Context with default implementations.
    pub fn new() -> Self {
        Self {
            env: Arc::new(NoopEnv),
            clock: Arc::new(SystemTimestamp),
            hmac: Arc::new(RustCryptoHmac),
        }
    }

    /// Replace the environment implementation.
    pub fn with_env(mut self, env: impl Env) -> Self {
        self.env = Arc::new(env);
        self
    }

    /// Replace the timestamp source.
    pub fn with_timestamp_source(mut self, clock: impl TimestampSource) -> Self {
        self.clock = Arc::new(clock);
        self
    }

    /// Replace the HMAC engine.
    pub fn with_hmac_engine(mut self, hmac: impl HmacEngine) -> Self {
        self.hmac = Arc::new(hmac);
        self
    }

    /// Get the environment variable.
    ///
    /// - Returns `Some(v)` if the environment variable is found and is valid utf-8.
    /// - Returns `None` if the environment variable is not found or value is invalid.
    #[inline]
    pub fn env_var(&self, key: &str) -> Option<String> {
        self.env.var(key)
    }

    /// Generate a fresh timestamp.
    #[inline]
    pub fn generate_timestamp(&self, format: TimestampFormat) -> Result<String> {
        self.clock.generate_timestamp(format)
    }

    /// Compute an HMAC with the configured engine.
    #[inline]
    pub fn compute_hmac(
        &self,
        message: &[u8],
        key: &[u8],
        algorithm: HmacAlgorithm,
        uppercase: bool,
        encoding: DigestEncoding,
    ) -> Result<String> {
        self.hmac
            .compute_hmac(message, key, algorithm, uppercase, encoding)
    }
}
