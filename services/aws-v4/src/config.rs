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

use log::debug;
use serde::Deserialize;
use signatory_core::utils::Redact;
use signatory_core::{Env, Error, Result};

use crate::constants::*;
use crate::credential::{Credential, CredentialScope, KeyMaterial};

/// Config for aws v4 signing.
///
/// Validated once by [`RequestSigner::new`](crate::RequestSigner::new).
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// `credential` as `access_key_id/date/region/service/termination`.
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SIGV4_CREDENTIAL`]
    ///
    /// If set, it takes place of `access_key_id`, `scope_date`, `region`,
    /// `service` and `termination`.
    pub credential: Option<String>,
    /// `access_key_id` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_ACCESS_KEY_ID`]
    pub access_key_id: Option<String>,
    /// `scope_date` as `YYYYMMDD`.
    pub scope_date: Option<String>,
    /// `region` will be loaded from:
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_REGION`]
    pub region: Option<String>,
    /// `service` like `s3` or `iam`.
    pub service: Option<String>,
    /// `termination` token, default to `aws4_request`.
    pub termination: String,
    /// `algorithm` will be loaded from:
    ///
    /// - this field
    /// - env value: [`AWS_SIGV4_ALGORITHM`]
    /// - default to `AWS4-HMAC-SHA256`
    pub algorithm: String,
    /// `secret_access_key` will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SECRET_ACCESS_KEY`]
    pub secret_access_key: Option<String>,
    /// `secret_prefix` prepended to the secret before deriving, default to `AWS4`.
    pub secret_prefix: String,
    /// `derived_key` is a hex encoded signing key, will be loaded from
    ///
    /// - this field if it's `is_some`
    /// - env value: [`AWS_SIGV4_DERIVED_KEY`]
    ///
    /// It must have been derived for the same scope.
    pub derived_key: Option<String>,
    /// `encode_query` re-encodes decoded query keys and values with
    /// AWS UriEncode before signing. Default to `false`, which keeps the
    /// decoded values as is.
    pub encode_query: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credential: None,
            access_key_id: None,
            scope_date: None,
            region: None,
            service: None,
            termination: DEFAULT_TERMINATION.to_string(),
            algorithm: DEFAULT_ALGORITHM.to_string(),
            secret_access_key: None,
            secret_prefix: DEFAULT_SECRET_PREFIX.to_string(),
            derived_key: None,
            encode_query: false,
        }
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("credential", &self.credential)
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("scope_date", &self.scope_date)
            .field("region", &self.region)
            .field("service", &self.service)
            .field("termination", &self.termination)
            .field("algorithm", &self.algorithm)
            .field("secret_access_key", &Redact::from(&self.secret_access_key))
            .field("secret_prefix", &self.secret_prefix)
            .field("derived_key", &Redact::from(&self.derived_key))
            .field("encode_query", &self.encode_query)
            .finish()
    }
}

impl Config {
    /// Load config from env, values already set on `self` are kept.
    ///
    /// Key material is only loaded when neither `secret_access_key` nor
    /// `derived_key` is set. `AWS_SECRET_ACCESS_KEY` is preferred over
    /// `AWS_SIGV4_DERIVED_KEY` when both exist in env.
    pub fn from_env(mut self, env: &impl Env) -> Self {
        if self.credential.is_none() {
            self.credential = env.var(AWS_SIGV4_CREDENTIAL);
        }
        if self.access_key_id.is_none() {
            self.access_key_id = env.var(AWS_ACCESS_KEY_ID);
        }
        if self.region.is_none() {
            self.region = env.var(AWS_REGION);
        }
        // Key material set on the struct wins over both env values.
        if self.secret_access_key.is_none() && self.derived_key.is_none() {
            self.secret_access_key = env.var(AWS_SECRET_ACCESS_KEY);
            if self.secret_access_key.is_none() {
                self.derived_key = env.var(AWS_SIGV4_DERIVED_KEY);
            }
        }
        if let Some(v) = env.var(AWS_SIGV4_ALGORITHM) {
            if self.algorithm == DEFAULT_ALGORITHM {
                self.algorithm = v;
            }
        }

        debug!("config loaded from env: {self:?}");
        self
    }

    /// Resolve the credential, either parsed from `credential` or
    /// assembled from the individual scope components.
    pub(crate) fn to_credential(&self) -> Result<Credential> {
        if let Some(cred) = &self.credential {
            return cred.parse();
        }

        let (Some(ak), Some(date), Some(region), Some(service)) = (
            &self.access_key_id,
            &self.scope_date,
            &self.region,
            &self.service,
        ) else {
            return Err(Error::config_invalid(
                "either credential or all of access_key_id, scope_date, region and service are required",
            ));
        };

        Credential::new(
            ak,
            CredentialScope::new(date, region, service, &self.termination)?,
        )
    }

    /// Resolve the key material, exactly one of `secret_access_key` and
    /// `derived_key` must be set.
    pub(crate) fn to_key_material(&self) -> Result<KeyMaterial> {
        match (&self.secret_access_key, &self.derived_key) {
            (Some(sk), None) if !sk.is_empty() => Ok(KeyMaterial::Secret(sk.clone())),
            (Some(_), None) => Err(Error::config_invalid(
                "secret_access_key must not be empty",
            )),
            (None, Some(dk)) => KeyMaterial::from_hex(dk),
            (Some(_), Some(_)) => Err(Error::config_invalid(
                "only one of secret_access_key and derived_key can be set",
            )),
            (None, None) => Err(Error::config_invalid(
                "either secret_access_key or derived_key is required",
            )),
        }
    }
}
