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
use percent_encoding::percent_decode_str;
use pretty_assertions::{assert_eq, assert_ne};
use seamsign_core::{Context, SigningRequest};
use seamsign_seamless_docs::{build_string_to_sign, evaluate, sign};

use super::{fixed_ctx, TickingTimestamp, NEW_YEAR};

const URLS: &[&str] = &[
    "https://api.example.com/v1/docs/123?foo=bar",
    "https://api.example.com",
    "http://api.example.com:8080/forms/",
    "/relative/path?x=1&y=2",
];

#[test]
fn test_string_to_sign_is_deterministic() -> Result<()> {
    for url in URLS {
        let first = build_string_to_sign("GET", url, "20240101T000000Z")?;
        let second = build_string_to_sign("GET", url, "20240101T000000Z")?;
        assert_eq!(first, second);
        assert!(!first.contains(char::is_whitespace), "{first}");
        assert_eq!(first.matches('+').count(), 2, "{first}");
    }
    Ok(())
}

#[test]
fn test_signature_decodes_to_lowercase_hex() -> Result<()> {
    let ctx = Context::new();
    for (message, secret) in [
        ("GET+/+20240101T000000Z", "mysecret"),
        ("PUT+/a/b/c+1704067200", "with spaces and ünïcode"),
        ("X+/+", ""),
    ] {
        let signature = sign(&ctx, message, secret)?;
        assert!(signature
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b"-._~%".contains(&b)));

        let decoded = percent_decode_str(&signature).decode_utf8()?;
        assert_eq!(decoded.len(), 64);
        assert!(decoded
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
    Ok(())
}

#[test]
fn test_secret_change_changes_signature() -> Result<()> {
    let ctx = Context::new();
    let message = "GET+/v1/docs/123+20240101T000000Z";
    let base = sign(&ctx, message, "mysecret")?;

    for secret in ["mysecreT", "Mysecret", "mysecre", "mysecret ", "mysecrets"] {
        assert_ne!(base, sign(&ctx, message, secret)?, "secret: {secret:?}");
    }
    assert_eq!(
        "8ac1aab638e3bd5ff91d9c51b1ea95c9efbe438d172fe379534fbcc918790529",
        sign(&ctx, message, "mysecreT")?
    );
    Ok(())
}

#[test]
fn test_fixed_timestamp_gives_identical_signatures() -> Result<()> {
    let ctx = fixed_ctx(NEW_YEAR);
    let req = SigningRequest::new("GET", "https://api.example.com/v1/docs/123?foo=bar");

    let first = evaluate(&ctx, &req, "mysecret")?;
    let second = evaluate(&ctx, &req, "mysecret")?;
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn test_timestamp_is_taken_on_every_call() -> Result<()> {
    let ctx = Context::new().with_timestamp_source(TickingTimestamp::starting_at(NEW_YEAR));
    let req = SigningRequest::new("GET", "https://api.example.com/v1/docs/123?foo=bar");

    let first = evaluate(&ctx, &req, "mysecret")?;
    let second = evaluate(&ctx, &req, "mysecret")?;
    assert_ne!(first, second);
    assert_eq!(
        "89dcabce320bac48a117eee6fa6cdf63852080898d6816b7767c6b1ca717dd99",
        first
    );
    assert_eq!(
        "42249988e22dc42262f4b5268cd857351fce3a2043d8c407d33dc978b2f60ed1",
        second
    );
    Ok(())
}
