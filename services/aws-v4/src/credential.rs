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

use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

use signatory_core::time::parse_date;
use signatory_core::utils::Redact;
use signatory_core::{Error, Result};

/// Scope binds a signature to one day, region and service.
///
/// Renders as `20110909/us-east-1/iam/aws4_request`.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct CredentialScope {
    date: String,
    region: String,
    service: String,
    termination: String,
}

impl CredentialScope {
    /// Create a new scope, every component must be non-empty and must not
    /// contain `/`, and `date` must be a `YYYYMMDD` date.
    pub fn new(date: &str, region: &str, service: &str, termination: &str) -> Result<Self> {
        for (name, value) in [
            ("date", date),
            ("region", region),
            ("service", service),
            ("termination", termination),
        ] {
            if value.is_empty() {
                return Err(Error::config_invalid(format!(
                    "credential scope {name} must not be empty"
                )));
            }
            if value.contains('/') {
                return Err(Error::config_invalid(format!(
                    "credential scope {name} must not contain '/': {value}"
                )));
            }
        }
        parse_date(date)?;

        Ok(Self {
            date: date.to_string(),
            region: region.to_string(),
            service: service.to_string(),
            termination: termination.to_string(),
        })
    }

    /// The scope date, `YYYYMMDD`.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// The scope region.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The scope service.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The termination token, conventionally `aws4_request`.
    pub fn termination(&self) -> &str {
        &self.termination
    }
}

impl Display for CredentialScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.date, self.region, self.service, self.termination
        )
    }
}

impl Debug for CredentialScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CredentialScope({self})")
    }
}

/// Credential is the access key id together with its scope.
///
/// Renders as `AKIDEXAMPLE/20110909/us-east-1/iam/aws4_request`.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    access_key_id: String,
    scope: CredentialScope,
}

impl Credential {
    /// Create a new credential.
    pub fn new(access_key_id: &str, scope: CredentialScope) -> Result<Self> {
        if access_key_id.is_empty() {
            return Err(Error::config_invalid("access key id must not be empty"));
        }
        if access_key_id.contains('/') {
            return Err(Error::config_invalid("access key id must not contain '/'"));
        }

        Ok(Self {
            access_key_id: access_key_id.to_string(),
            scope,
        })
    }

    /// Access key id.
    pub fn access_key_id(&self) -> &str {
        &self.access_key_id
    }

    /// Credential scope.
    pub fn scope(&self) -> &CredentialScope {
        &self.scope
    }
}

impl FromStr for Credential {
    type Err = Error;

    /// Parse `access_key_id/date/region/service/termination`.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('/').collect();
        let &[access_key_id, date, region, service, termination] = parts.as_slice() else {
            return Err(Error::config_invalid(format!(
                "credential must have 5 '/' separated segments, got {}",
                parts.len()
            )));
        };

        Credential::new(
            access_key_id,
            CredentialScope::new(date, region, service, termination)?,
        )
    }
}

impl Display for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.access_key_id, self.scope)
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("access_key_id", &Redact::from(&self.access_key_id))
            .field("scope", &self.scope)
            .finish()
    }
}

/// KeyMaterial is what the signing key gets resolved from.
#[derive(Clone, PartialEq, Eq)]
pub enum KeyMaterial {
    /// Raw secret access key, derived into a signing key on every call.
    Secret(String),
    /// Signing key derived ahead of time for the same scope.
    Derived(Vec<u8>),
}

impl KeyMaterial {
    /// Build the derived variant from a hex encoded key.
    pub fn from_hex(key: &str) -> Result<Self> {
        let bs = hex::decode(key.trim()).map_err(|e| {
            Error::config_invalid("derived key must be hex encoded").with_source(e)
        })?;
        if bs.is_empty() {
            return Err(Error::config_invalid("derived key must not be empty"));
        }
        Ok(KeyMaterial::Derived(bs))
    }
}

impl Debug for KeyMaterial {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            KeyMaterial::Secret(secret) => f
                .debug_tuple("Secret")
                .field(&Redact::from(secret))
                .finish(),
            KeyMaterial::Derived(key) => write!(f, "Derived(*** {} bytes)", key.len()),
        }
    }
}
