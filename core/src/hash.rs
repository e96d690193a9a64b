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

//! Hash related utils.

use std::fmt::Debug;

use base64::prelude::BASE64_STANDARD;
use base64::Engine;
use hmac::digest::KeyInit;
use hmac::Hmac;
use hmac::Mac;
use sha1::Sha1;
use sha2::Sha256;
use sha2::Sha512;

use crate::{Error, Result};

/// Hash function used as the base of an HMAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HmacAlgorithm {
    /// HMAC-SHA1
    Sha1,
    /// HMAC-SHA256
    Sha256,
    /// HMAC-SHA512
    Sha512,
}

/// Text encoding applied to a raw digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigestEncoding {
    /// Hexadecimal, two characters per byte.
    Hexadecimal,
    /// Standard base64 with padding.
    Base64,
}

/// HmacEngine computes keyed digests and returns them in textual form.
///
/// The signing code never calls a hash crate directly; it goes through the
/// engine carried by [`crate::Context`] so tests and hosts can substitute it.
pub trait HmacEngine: Debug + Send + Sync + 'static {
    /// Compute the HMAC of `message` keyed by `key`.
    ///
    /// `uppercase` only applies to [`DigestEncoding::Hexadecimal`].
    fn compute_hmac(
        &self,
        message: &[u8],
        key: &[u8],
        algorithm: HmacAlgorithm,
        uppercase: bool,
        encoding: DigestEncoding,
    ) -> Result<String>;
}

/// HmacEngine backed by the RustCrypto `hmac`, `sha1` and `sha2` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct RustCryptoHmac;

impl HmacEngine for RustCryptoHmac {
    fn compute_hmac(
        &self,
        message: &[u8],
        key: &[u8],
        algorithm: HmacAlgorithm,
        uppercase: bool,
        encoding: DigestEncoding,
    ) -> Result<String> {
        let digest = match algorithm {
            HmacAlgorithm::Sha1 => mac::<Hmac<Sha1>>(key, message)?,
            HmacAlgorithm::Sha256 => mac::<Hmac<Sha256>>(key, message)?,
            HmacAlgorithm::Sha512 => mac::<Hmac<Sha512>>(key, message)?,
        };

        Ok(match (encoding, uppercase) {
            (DigestEncoding::Hexadecimal, false) => hex::encode(digest),
            (DigestEncoding::Hexadecimal, true) => hex::encode_upper(digest),
            (DigestEncoding::Base64, _) => base64_encode(&digest),
        })
    }
}

fn mac<M: Mac + KeyInit>(key: &[u8], content: &[u8]) -> Result<Vec<u8>> {
    let mut h = <M as Mac>::new_from_slice(key)
        .map_err(|e| Error::signing_failure(format!("hmac key rejected: {e}")))?;
    h.update(content);

    Ok(h.finalize().into_bytes().to_vec())
}

/// Base64 encode
pub fn base64_encode(content: &[u8]) -> String {
    BASE64_STANDARD.encode(content)
}
