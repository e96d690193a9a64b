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

use std::collections::HashMap;
use std::fmt::Debug;

/// Env is used to read environment variables while loading configuration.
///
/// Keeping this behind a trait lets tests and embedders supply their own
/// values instead of mutating the process environment.
pub trait Env: Debug + Send + Sync + 'static {
    /// Get an environment variable.
    ///
    /// Returns `None` if the variable is unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;
}

/// Implements Env for the OS context, reading `std::env`.
#[derive(Debug, Copy, Clone, Default)]
pub struct OsEnv;

impl Env for OsEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// StaticEnv provides a fixed set of environment variables.
#[derive(Debug, Clone, Default)]
pub struct StaticEnv {
    /// The environment variables
    pub envs: HashMap<String, String>,
}

impl StaticEnv {
    /// Create a StaticEnv from key/value pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            envs: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Env for StaticEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.envs.get(key).cloned()
    }
}

/// Env that holds nothing; the default of [`crate::Context`].
#[derive(Debug, Copy, Clone, Default)]
pub(crate) struct NoopEnv;

impl Env for NoopEnv {
    fn var(&self, _: &str) -> Option<String> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_os_env_reads_process_env() {
        temp_env::with_var("SEAMSIGN_CORE_TEST_VAR", Some("hello"), || {
            assert_eq!(OsEnv.var("SEAMSIGN_CORE_TEST_VAR").as_deref(), Some("hello"));
        });
        temp_env::with_var_unset("SEAMSIGN_CORE_TEST_VAR", || {
            assert!(OsEnv.var("SEAMSIGN_CORE_TEST_VAR").is_none());
        });
    }

    #[test]
    fn test_static_env() {
        let env = StaticEnv::from_pairs([("A", "1")]);
        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert!(env.var("B").is_none());
        assert!(NoopEnv.var("A").is_none());
    }
}
