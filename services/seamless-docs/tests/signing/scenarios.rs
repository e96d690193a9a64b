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
use http::Request;
use pretty_assertions::assert_eq;
use seamsign_core::{Context, ErrorKind, OsEnv, Signer, SigningRequest, StaticEnv};
use seamsign_seamless_docs::{
    build_string_to_sign, evaluate, DefaultCredentialProvider, RequestSigner,
    StaticCredentialProvider, SEAMLESS_SECRET_KEY,
};

use super::{fixed_ctx, init_logger, NEW_YEAR};

#[test]
fn test_get_with_query() -> Result<()> {
    init_logger();

    let string_to_sign = build_string_to_sign(
        "GET",
        "https://api.example.com/v1/docs/123?foo=bar",
        "20240101T000000Z",
    )?;
    assert_eq!("GET+/v1/docs/123+20240101T000000Z", string_to_sign);

    let req = SigningRequest::new("GET", "https://api.example.com/v1/docs/123?foo=bar");
    let signature = evaluate(&fixed_ctx(NEW_YEAR), &req, "mysecret")?;
    assert_eq!(
        "89dcabce320bac48a117eee6fa6cdf63852080898d6816b7767c6b1ca717dd99",
        signature
    );
    assert!(!signature.contains('%'));
    Ok(())
}

#[test]
fn test_post_without_path() -> Result<()> {
    init_logger();

    let string_to_sign =
        build_string_to_sign("POST", "https://api.example.com", "20240101T000000Z")?;
    assert_eq!("POST+/+20240101T000000Z", string_to_sign);

    let req = SigningRequest::new("POST", "https://api.example.com");
    let signature = evaluate(&fixed_ctx(NEW_YEAR), &req, "mysecret")?;
    assert_eq!(
        "645beab7aaa9e72c5f810a34584eb3088062165e4d6b7f3769e397330df1ad33",
        signature
    );
    Ok(())
}

#[test]
fn test_empty_secret_is_accepted() -> Result<()> {
    let req = SigningRequest::new("GET", "https://api.example.com");
    let signature = evaluate(&fixed_ctx(NEW_YEAR), &req, "")?;
    assert_eq!(
        "d206958a224117fbcae2402fbbe7c5b6a2d23548752329891ad8156aba44211e",
        signature
    );
    Ok(())
}

#[test]
fn test_malformed_url_never_signs() {
    for url in [
        "",
        "https://api.example.com/v1 docs",
        "http://[::1/",
        "://api.example.com/v1/docs",
        "1http://api.example.com/v1/docs",
    ] {
        let req = SigningRequest::new("GET", url);
        let err = evaluate(&fixed_ctx(NEW_YEAR), &req, "mysecret").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedUrl, "url: {url:?}");
    }
}

#[test]
fn test_relative_references_sign_like_absolute() -> Result<()> {
    let ctx = fixed_ctx(NEW_YEAR);
    let absolute = evaluate(
        &ctx,
        &SigningRequest::new("GET", "https://api.example.com/v1/docs/123?foo=bar"),
        "mysecret",
    )?;

    for url in [
        "/v1/docs/123?foo=bar",
        "v1/docs/123",
        "//api.example.com/v1/docs/123",
    ] {
        let signature = evaluate(&ctx, &SigningRequest::new("GET", url), "mysecret")?;
        assert_eq!(absolute, signature, "url: {url:?}");
    }

    assert_eq!(
        "GET+/+20240101T000000Z",
        build_string_to_sign("GET", "?foo=bar", "20240101T000000Z")?
    );
    Ok(())
}

#[test]
fn test_signer_appends_signature_param() -> Result<()> {
    init_logger();

    let signer = Signer::new(
        fixed_ctx(NEW_YEAR),
        StaticCredentialProvider::new("mysecret"),
        RequestSigner::new(),
    );

    let (mut parts, _) = Request::post("https://api.example.com").body(())?.into_parts();
    signer.sign(&mut parts)?;

    assert_eq!(
        "https://api.example.com/?Signature=645beab7aaa9e72c5f810a34584eb3088062165e4d6b7f3769e397330df1ad33",
        parts.uri.to_string()
    );
    Ok(())
}

#[test]
fn test_signer_with_env_credential() -> Result<()> {
    let ctx = fixed_ctx(NEW_YEAR).with_env(StaticEnv::from_pairs([(
        SEAMLESS_SECRET_KEY,
        "mysecret",
    )]));
    let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());

    let req = SigningRequest::new("GET", "https://api.example.com/v1/docs/123?foo=bar");
    assert_eq!(
        "89dcabce320bac48a117eee6fa6cdf63852080898d6816b7767c6b1ca717dd99",
        signer.evaluate(&req)?
    );
    Ok(())
}

#[test]
fn test_signer_without_credential_fails() {
    temp_env::with_var_unset(SEAMLESS_SECRET_KEY, || {
        let ctx = Context::new().with_env(OsEnv);
        let signer = Signer::new(ctx, DefaultCredentialProvider::new(), RequestSigner::new());

        let err = signer
            .evaluate(&SigningRequest::new("GET", "https://api.example.com"))
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SigningFailure);
    });
}
