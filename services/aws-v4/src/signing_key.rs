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

use std::fmt::{Debug, Formatter};

use signatory_core::hash::HashFamily;

use crate::credential::{CredentialScope, KeyMaterial};

/// SigningKey is the scoped key used as the HMAC key of the final signature.
#[derive(Clone, PartialEq, Eq)]
pub struct SigningKey(Vec<u8>);

impl SigningKey {
    /// Resolve key material into the signing key for `scope`.
    ///
    /// A derived key is used as is, the caller must have derived it for
    /// the same scope.
    pub fn resolve(
        hash: HashFamily,
        secret_prefix: &str,
        material: &KeyMaterial,
        scope: &CredentialScope,
    ) -> Self {
        match material {
            KeyMaterial::Secret(secret) => derive_signing_key(hash, secret_prefix, secret, scope),
            KeyMaterial::Derived(key) => SigningKey(key.clone()),
        }
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Hex encoded key, accepted back as a derived key.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl Debug for SigningKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "SigningKey(*** {} bytes)", self.0.len())
    }
}

/// Derive the signing key from a secret.
///
/// ```text
/// kDate    = HMAC(prefix + secret, date)
/// kRegion  = HMAC(kDate, region)
/// kService = HMAC(kRegion, service)
/// kSigning = HMAC(kService, termination)
/// ```
pub fn derive_signing_key(
    hash: HashFamily,
    secret_prefix: &str,
    secret: &str,
    scope: &CredentialScope,
) -> SigningKey {
    // Sign secret
    let secret = format!("{secret_prefix}{secret}");
    // Sign date
    let sign_date = hash.hmac(secret.as_bytes(), scope.date().as_bytes());
    // Sign region
    let sign_region = hash.hmac(sign_date.as_slice(), scope.region().as_bytes());
    // Sign service
    let sign_service = hash.hmac(sign_region.as_slice(), scope.service().as_bytes());
    // Sign request
    let sign_request = hash.hmac(sign_service.as_slice(), scope.termination().as_bytes());

    SigningKey(sign_request)
}
