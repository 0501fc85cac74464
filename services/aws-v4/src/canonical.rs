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

//! Canonical request construction.
//!
//! ```text
//! POST
//! /
//!
//! content-type:application/x-www-form-urlencoded; charset=utf-8
//! host:iam.amazonaws.com
//! x-amz-date:20110909T233600Z
//!
//! content-type;host;x-amz-date
//! b6359072c78d70ebee1e81adcbab4f01bf2c23245fa365ef83fe8f1f955085e2
//! ```

use std::fmt::{Display, Formatter};

use percent_encoding::utf8_percent_encode;
use signatory_core::hash::HashFamily;
use signatory_core::Result;

use crate::constants::AWS_QUERY_ENCODE_SET;
use crate::SigningRequest;

/// CanonicalRequest is the byte exact form of a request that gets hashed
/// into the string to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalRequest {
    method: String,
    path: String,
    query: String,
    headers: String,
    signed_headers: String,
    payload_hash: String,
}

impl CanonicalRequest {
    /// Canonicalize the request.
    ///
    /// Fails only if the url cannot be parsed.
    pub fn build(hash: HashFamily, req: &SigningRequest, encode_query: bool) -> Result<Self> {
        let (path, query) = req.path_and_query()?;

        Ok(CanonicalRequest {
            method: req.method.to_ascii_uppercase(),
            path,
            query: canonical_query_string(query.as_deref().unwrap_or_default(), encode_query),
            headers: canonical_headers(&req.headers),
            signed_headers: signed_headers(&req.headers),
            payload_hash: hash.hex_digest(&req.body),
        })
    }

    /// Signed headers: `content-type;host;x-amz-date`.
    pub fn signed_headers(&self) -> &str {
        &self.signed_headers
    }

    /// Hex digest of the payload.
    pub fn payload_hash(&self) -> &str {
        &self.payload_hash
    }

    /// Canonical query string.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl Display for CanonicalRequest {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        // Canonical headers carry their own trailing newline.
        writeln!(f, "{}", self.method)?;
        writeln!(f, "{}", self.path)?;
        writeln!(f, "{}", self.query)?;
        writeln!(f, "{}", self.headers)?;
        writeln!(f, "{}", self.signed_headers)?;
        write!(f, "{}", self.payload_hash)
    }
}

/// Build canonical query string from a raw query.
///
/// Pairs are form-urlencoded decoded and sorted by key. Values of a
/// repeated key are grouped in url order and joined with `,`, and decoded
/// values are used as is.
///
/// With `encode` set, keys and values are re-encoded with AWS UriEncode
/// and a repeated key yields one pair per value, sorted by key then value.
///
/// ```shell
/// foo=bar&abc=123 => abc=123&foo=bar
/// b=2&a=z&a=y     => a=z,y&b=2
/// ```
pub fn canonical_query_string(query: &str, encode: bool) -> String {
    if query.is_empty() {
        return String::new();
    }

    let pairs = form_urlencoded::parse(query.as_bytes());
    if encode {
        let mut pairs = pairs
            .map(|(k, v)| {
                (
                    utf8_percent_encode(&k, &AWS_QUERY_ENCODE_SET).to_string(),
                    utf8_percent_encode(&v, &AWS_QUERY_ENCODE_SET).to_string(),
                )
            })
            .collect::<Vec<_>>();
        pairs.sort();
        return join_query(pairs);
    }

    // Group values by key, keeping the first-seen order of values.
    let mut grouped: Vec<(String, Vec<String>)> = Vec::new();
    for (k, v) in pairs {
        match grouped.iter_mut().find(|(key, _)| key.as_str() == k) {
            Some((_, values)) => values.push(v.into_owned()),
            None => grouped.push((k.into_owned(), vec![v.into_owned()])),
        }
    }
    grouped.sort_by(|(l, _), (r, _)| l.cmp(r));

    join_query(grouped.into_iter().map(|(k, vs)| (k, vs.join(","))))
}

fn join_query(pairs: impl IntoIterator<Item = (String, String)>) -> String {
    pairs
        .into_iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Lower-cased header pairs sorted by name.
///
/// Sort is stable so that duplicated names keep their input order.
fn sorted_headers(headers: &[(String, String)]) -> Vec<(String, &str)> {
    let mut hs = headers
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.as_str()))
        .collect::<Vec<_>>();
    hs.sort_by(|(l, _), (r, _)| l.cmp(r));
    hs
}

/// Build canonical headers, every header rendered as `name:value\n`.
///
/// Values are kept unmodified.
pub fn canonical_headers(headers: &[(String, String)]) -> String {
    let mut s = String::with_capacity(64);
    for (k, v) in sorted_headers(headers) {
        s.push_str(&k);
        s.push(':');
        s.push_str(v);
        s.push('\n');
    }
    s
}

/// Build signed headers: lower-cased names, sorted, joined with `;`.
pub fn signed_headers(headers: &[(String, String)]) -> String {
    sorted_headers(headers)
        .into_iter()
        .map(|(k, _)| k)
        .collect::<Vec<_>>()
        .join(";")
}
