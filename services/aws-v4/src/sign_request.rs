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

use bytes::Bytes;
use http::request::Parts;
use http::{header, HeaderValue};
use log::debug;
use signatory_core::hash::HashFamily;
use signatory_core::Result;

use crate::canonical::CanonicalRequest;
use crate::credential::{Credential, CredentialScope, KeyMaterial};
use crate::signing_key::SigningKey;
use crate::string_to_sign::{ensure_in_scope, string_to_sign};
use crate::{Config, SigningRequest, SigningTime};

/// RequestSigner that implement AWS SigV4.
///
/// - [Signature Version 4 signing process](https://docs.aws.amazon.com/general/latest/gr/signature-version-4.html)
///
/// The signer holds only validated, read-only configuration. Every value
/// derived while signing lives for one call, so a single signer can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct RequestSigner {
    algorithm: String,
    hash: HashFamily,
    credential: Credential,
    key: KeyMaterial,
    secret_prefix: String,
    encode_query: bool,
}

impl RequestSigner {
    /// Create a new signer from config.
    ///
    /// Returns `ConfigInvalid` if the algorithm is unsupported, the
    /// credential or scope is missing or malformed, or key material is
    /// missing or ambiguous.
    pub fn new(config: Config) -> Result<Self> {
        let hash = HashFamily::from_algorithm(&config.algorithm)?;
        let credential = config.to_credential()?;
        let key = config.to_key_material()?;

        Ok(Self {
            algorithm: config.algorithm,
            hash,
            credential,
            key,
            secret_prefix: config.secret_prefix,
            encode_query: config.encode_query,
        })
    }

    /// Algorithm token, like `AWS4-HMAC-SHA256`.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Hash family resolved from the algorithm token.
    pub fn hash(&self) -> HashFamily {
        self.hash
    }

    /// Credential: `AKIDEXAMPLE/20110909/us-east-1/iam/aws4_request`.
    pub fn credential(&self) -> String {
        self.credential.to_string()
    }

    /// Credential scope: `20110909/us-east-1/iam/aws4_request`.
    pub fn credential_scope(&self) -> String {
        self.credential.scope().to_string()
    }

    /// Signed headers of the request: `content-type;host;x-amz-date`.
    pub fn signed_headers(&self, req: &SigningRequest) -> String {
        crate::canonical::signed_headers(&req.headers)
    }

    /// Canonical request of the request.
    pub fn canonical_request(&self, req: &SigningRequest) -> Result<String> {
        Ok(self.build_canonical_request(req)?.to_string())
    }

    /// String to sign of the request at `time`.
    pub fn string_to_sign(&self, time: impl Into<SigningTime>, req: &SigningRequest) -> Result<String> {
        let timestamp = self.timestamp(time)?;
        let creq = self.build_canonical_request(req)?;
        self.build_string_to_sign(&timestamp, &creq)
    }

    /// Signing key for the configured scope.
    pub fn signing_key(&self) -> SigningKey {
        SigningKey::resolve(
            self.hash,
            &self.secret_prefix,
            &self.key,
            self.credential.scope(),
        )
    }

    /// Signature of the request at `time`, lower-case hex.
    pub fn signature(&self, time: impl Into<SigningTime>, req: &SigningRequest) -> Result<String> {
        let timestamp = self.timestamp(time)?;
        let creq = self.build_canonical_request(req)?;
        self.calculate_signature(&timestamp, &creq)
    }

    /// Authorization header value of the request at `time`.
    ///
    /// ```text
    /// AWS4-HMAC-SHA256 Credential=AKIDEXAMPLE/20110909/us-east-1/iam/aws4_request, SignedHeaders=content-type;host;x-amz-date, Signature=ced6826d...
    /// ```
    pub fn authorization(&self, time: impl Into<SigningTime>, req: &SigningRequest) -> Result<String> {
        let timestamp = self.timestamp(time)?;
        let creq = self.build_canonical_request(req)?;
        let signature = self.calculate_signature(&timestamp, &creq)?;

        Ok(format!(
            "{} Credential={}, SignedHeaders={}, Signature={}",
            self.algorithm,
            self.credential,
            creq.signed_headers(),
            signature
        ))
    }

    /// Sign the http request by inserting the `Authorization` header.
    ///
    /// Only the headers already present in `parts` are signed, callers are
    /// expected to set `host` and `x-amz-date` themselves.
    pub fn sign(
        &self,
        parts: &mut Parts,
        body: impl Into<Bytes>,
        time: impl Into<SigningTime>,
    ) -> Result<()> {
        let req = SigningRequest::from_parts(parts, body)?;
        let mut authorization = HeaderValue::from_str(&self.authorization(time, &req)?)?;
        authorization.set_sensitive(true);

        parts.headers.insert(header::AUTHORIZATION, authorization);
        Ok(())
    }

    /// Format the signing time and reject it before any hashing if it is
    /// not on the scope date.
    fn timestamp(&self, time: impl Into<SigningTime>) -> Result<String> {
        let timestamp = time.into().to_iso8601()?;
        ensure_in_scope(&timestamp, self.credential.scope())?;
        Ok(timestamp)
    }

    fn build_canonical_request(&self, req: &SigningRequest) -> Result<CanonicalRequest> {
        let creq = CanonicalRequest::build(self.hash, req, self.encode_query)?;
        debug!("calculated canonical request: {creq}");
        Ok(creq)
    }

    fn build_string_to_sign(&self, timestamp: &str, creq: &CanonicalRequest) -> Result<String> {
        let scope: &CredentialScope = self.credential.scope();
        debug!("calculated scope: {scope}");

        let hashed_request = self.hash.hex_digest(creq.to_string().as_bytes());
        let s = string_to_sign(&self.algorithm, timestamp, scope, &hashed_request)?;
        debug!("calculated string to sign: {s}");
        Ok(s)
    }

    fn calculate_signature(&self, timestamp: &str, creq: &CanonicalRequest) -> Result<String> {
        let string_to_sign = self.build_string_to_sign(timestamp, creq)?;
        let signing_key = self.signing_key();
        Ok(self
            .hash
            .hex_hmac(signing_key.as_bytes(), string_to_sign.as_bytes()))
    }
}
