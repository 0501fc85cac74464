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

use std::str::FromStr;

use bytes::Bytes;
use http::Uri;
use signatory_core::time::{format_iso8601, parse_iso8601, DateTime};
use signatory_core::{Error, Result};

/// Signing view of one request.
///
/// Headers are kept as given: names are lower-cased only while
/// canonicalizing, duplicates are never merged.
#[derive(Debug, Clone, Default)]
pub struct SigningRequest {
    /// HTTP method, compared case-insensitively.
    pub method: String,
    /// Absolute url or path with query.
    pub url: String,
    /// HTTP headers, names compared case-insensitively.
    pub headers: Vec<(String, String)>,
    /// Raw payload, empty if absent.
    pub body: Bytes,
}

impl SigningRequest {
    /// Create a new request view without headers and body.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            url: url.into(),
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Set the payload.
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Build a signing view from http::request::Parts and its body.
    pub fn from_parts(parts: &http::request::Parts, body: impl Into<Bytes>) -> Result<Self> {
        let mut headers = Vec::with_capacity(parts.headers.len());
        for (k, v) in parts.headers.iter() {
            headers.push((k.as_str().to_string(), v.to_str()?.to_string()));
        }

        Ok(SigningRequest {
            method: parts.method.as_str().to_string(),
            url: parts.uri.to_string(),
            headers,
            body: body.into(),
        })
    }

    /// Parse the url into path and raw query.
    ///
    /// A bare authority like `http://example.com` has the path `/`.
    pub(crate) fn path_and_query(&self) -> Result<(String, Option<String>)> {
        let uri = Uri::from_str(&self.url).map_err(|e| {
            Error::request_invalid(format!("failed to parse url: {}", self.url)).with_source(e)
        })?;

        Ok((uri.path().to_string(), uri.query().map(|q| q.to_string())))
    }
}

/// SigningTime is the request timestamp.
///
/// Either a pre-formatted `YYYYMMDDTHHMMSSZ` string or a UTC date time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningTime {
    /// Pre-formatted ISO 8601 basic timestamp.
    Formatted(String),
    /// UTC date time.
    DateTime(DateTime),
}

impl SigningTime {
    /// Render as `YYYYMMDDTHHMMSSZ`.
    ///
    /// Pre-formatted input must be a valid timestamp in that exact form.
    pub fn to_iso8601(&self) -> Result<String> {
        match self {
            SigningTime::Formatted(s) => {
                parse_iso8601(s)?;
                Ok(s.clone())
            }
            SigningTime::DateTime(t) => Ok(format_iso8601(*t)),
        }
    }
}

impl From<DateTime> for SigningTime {
    fn from(t: DateTime) -> Self {
        SigningTime::DateTime(t)
    }
}

impl From<&str> for SigningTime {
    fn from(s: &str) -> Self {
        SigningTime::Formatted(s.to_string())
    }
}

impl From<String> for SigningTime {
    fn from(s: String) -> Self {
        SigningTime::Formatted(s)
    }
}
