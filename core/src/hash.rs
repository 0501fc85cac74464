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

use std::fmt;
use std::str::FromStr;

use crate::Error;
use hmac::Hmac;
use hmac::Mac;
use sha2::Digest;
use sha2::Sha256;
use sha2::Sha512;

/// HashFamily is the digest/HMAC pair used consistently across a whole
/// signature: payload digest, canonical request digest, every key
/// derivation step and the final signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HashFamily {
    /// SHA-256, signatures are 64 hex chars.
    #[default]
    Sha256,
    /// SHA-512, signatures are 128 hex chars.
    Sha512,
}

impl HashFamily {
    /// Resolve the hash family from an algorithm token like `AWS4-HMAC-SHA256`.
    ///
    /// Only the last `-` separated segment is inspected, case-insensitively.
    pub fn from_algorithm(algorithm: &str) -> crate::Result<Self> {
        let suffix = algorithm.rsplit('-').next().unwrap_or_default();
        match suffix.to_ascii_lowercase().as_str() {
            "sha256" => Ok(HashFamily::Sha256),
            "sha512" => Ok(HashFamily::Sha512),
            _ => Err(Error::config_invalid(format!(
                "unsupported algorithm: {algorithm}"
            ))),
        }
    }

    /// The conventional AWS algorithm token for this family.
    pub fn algorithm(&self) -> &'static str {
        match self {
            HashFamily::Sha256 => "AWS4-HMAC-SHA256",
            HashFamily::Sha512 => "AWS4-HMAC-SHA512",
        }
    }

    /// Output length in bytes.
    pub fn output_len(&self) -> usize {
        match self {
            HashFamily::Sha256 => 32,
            HashFamily::Sha512 => 64,
        }
    }

    /// Digest `content`.
    pub fn digest(&self, content: &[u8]) -> Vec<u8> {
        match self {
            HashFamily::Sha256 => Sha256::digest(content).to_vec(),
            HashFamily::Sha512 => Sha512::digest(content).to_vec(),
        }
    }

    /// Hex encoded digest of `content`.
    ///
    /// Use this function instead of `hex::encode(family.digest(content))` can
    /// reduce extra copy.
    pub fn hex_digest(&self, content: &[u8]) -> String {
        match self {
            HashFamily::Sha256 => hex::encode(Sha256::digest(content).as_slice()),
            HashFamily::Sha512 => hex::encode(Sha512::digest(content).as_slice()),
        }
    }

    /// HMAC `content` with `key`.
    pub fn hmac(&self, key: &[u8], content: &[u8]) -> Vec<u8> {
        match self {
            HashFamily::Sha256 => {
                let mut h = Hmac::<Sha256>::new_from_slice(key)
                    .expect("hmac must accept keys of any length");
                h.update(content);
                h.finalize().into_bytes().to_vec()
            }
            HashFamily::Sha512 => {
                let mut h = Hmac::<Sha512>::new_from_slice(key)
                    .expect("hmac must accept keys of any length");
                h.update(content);
                h.finalize().into_bytes().to_vec()
            }
        }
    }

    /// Hex encoded HMAC of `content` with `key`.
    pub fn hex_hmac(&self, key: &[u8], content: &[u8]) -> String {
        hex::encode(self.hmac(key, content))
    }
}

impl FromStr for HashFamily {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algorithm(s)
    }
}

impl fmt::Display for HashFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashFamily::Sha256 => f.write_str("sha256"),
            HashFamily::Sha512 => f.write_str("sha512"),
        }
    }
}
