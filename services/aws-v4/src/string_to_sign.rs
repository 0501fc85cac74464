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

use std::fmt::Write;

use signatory_core::{Error, Result};

use crate::credential::CredentialScope;

/// Build the string to sign.
///
/// ```text
/// AWS4-HMAC-SHA256
/// 20110909T233600Z
/// 20110909/us-east-1/iam/aws4_request
/// <hashed_canonical_request>
/// ```
///
/// `timestamp` must be formatted as `YYYYMMDDTHHMMSSZ` and fall on the
/// scope date, otherwise `DateScopeMismatch` is returned.
pub fn string_to_sign(
    algorithm: &str,
    timestamp: &str,
    scope: &CredentialScope,
    hashed_canonical_request: &str,
) -> Result<String> {
    ensure_in_scope(timestamp, scope)?;

    let mut f = String::with_capacity(
        algorithm.len() + timestamp.len() + 64 + hashed_canonical_request.len(),
    );
    writeln!(f, "{algorithm}")?;
    writeln!(f, "{timestamp}")?;
    writeln!(f, "{scope}")?;
    write!(f, "{hashed_canonical_request}")?;
    Ok(f)
}

/// Check that `timestamp` falls on the scope date.
pub(crate) fn ensure_in_scope(timestamp: &str, scope: &CredentialScope) -> Result<()> {
    if timestamp.get(..8) != Some(scope.date()) {
        return Err(Error::date_scope_mismatch(format!(
            "request timestamp {timestamp} is not on scope date {}",
            scope.date()
        )));
    }
    Ok(())
}
