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

use seamsign_core::Result;
use seamsign_core::{Context, ProvideCredential, ProvideCredentialChain};

use crate::credential::Credential;
use crate::provide_credential::EnvCredentialProvider;

/// DefaultCredentialProvider will try to load credential from different sources.
///
/// Resolution order:
///
/// 1. Environment variables
#[derive(Debug)]
pub struct DefaultCredentialProvider {
    chain: ProvideCredentialChain<Credential>,
}

impl Default for DefaultCredentialProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultCredentialProvider {
    /// Create a new DefaultCredentialProvider
    pub fn new() -> Self {
        let chain = ProvideCredentialChain::new().push(EnvCredentialProvider::new());

        Self { chain }
    }

    /// Create with a custom credential chain.
    pub fn with_chain(chain: ProvideCredentialChain<Credential>) -> Self {
        Self { chain }
    }

    /// Add a credential provider to the front of the default chain.
    ///
    /// This allows adding a high-priority credential source that will be tried
    /// before all other providers in the default chain.
    ///
    /// # Example
    ///
    /// ```
    /// use seamsign_seamless_docs::{DefaultCredentialProvider, StaticCredentialProvider};
    ///
    /// let provider = DefaultCredentialProvider::new()
    ///     .push_front(StaticCredentialProvider::new("secret_key"));
    /// ```
    pub fn push_front(
        mut self,
        provider: impl ProvideCredential<Credential = Credential> + 'static,
    ) -> Self {
        self.chain = self.chain.push_front(provider);
        self
    }
}

impl ProvideCredential for DefaultCredentialProvider {
    type Credential = Credential;

    fn provide_credential(&self, ctx: &Context) -> Result<Option<Self::Credential>> {
        self.chain.provide_credential(ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::provide_credential::StaticCredentialProvider;
    use seamsign_core::StaticEnv;

    #[test]
    fn test_default_loader_without_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv::default());

        let loader = DefaultCredentialProvider::new();
        let credential = loader.provide_credential(&ctx)?;

        assert!(credential.is_none());
        Ok(())
    }

    #[test]
    fn test_default_loader_with_env() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([(
            SEAMLESS_SECRET_KEY,
            "secret_key",
        )]));

        let loader = DefaultCredentialProvider::new();
        let credential = loader
            .provide_credential(&ctx)?
            .expect("credential must be loaded");

        assert_eq!("secret_key", credential.secret_key);
        Ok(())
    }

    #[test]
    fn test_default_loader_push_front() -> Result<()> {
        let ctx = Context::new().with_env(StaticEnv::from_pairs([(
            SEAMLESS_SECRET_KEY,
            "env_secret",
        )]));

        let loader =
            DefaultCredentialProvider::new().push_front(StaticCredentialProvider::new("static"));
        let credential = loader
            .provide_credential(&ctx)?
            .expect("credential must be loaded");

        assert_eq!("static", credential.secret_key);
        Ok(())
    }
}
