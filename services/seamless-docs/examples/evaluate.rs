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

use anyhow::Result;
use log::info;
use seamsign_core::{Context, OsEnv, Signer, SigningRequest};
use seamsign_seamless_docs::{DefaultCredentialProvider, RequestSigner, StaticCredentialProvider};

fn main() -> Result<()> {
    let _ = env_logger::builder().try_init();

    let ctx = Context::new().with_env(OsEnv);

    // Falls back to a demo secret when SEAMLESS_SECRET_KEY is unset.
    let provider = DefaultCredentialProvider::new();
    let signer = if ctx.env_var(seamsign_seamless_docs::SEAMLESS_SECRET_KEY).is_some() {
        Signer::new(ctx, provider, RequestSigner::new())
    } else {
        info!("SEAMLESS_SECRET_KEY is not set, using demo secret");
        Signer::new(
            ctx,
            provider.push_front(StaticCredentialProvider::new("demo-secret")),
            RequestSigner::new(),
        )
    };

    let req = SigningRequest::new("GET", "https://api.seamlessdocs.com/api/account/verify");
    let signature = signer.evaluate(&req)?;
    println!("Signature={signature}");

    let (mut parts, _) = http::Request::get(&req.url).body(())?.into_parts();
    signer.sign(&mut parts)?;
    println!("{} {}", parts.method, parts.uri);

    Ok(())
}
