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

use percent_encoding::AsciiSet;
use percent_encoding::NON_ALPHANUMERIC;

/// Algorithm token used when none is configured.
pub const DEFAULT_ALGORITHM: &str = "AWS4-HMAC-SHA256";
/// Termination token closing the credential scope.
pub const DEFAULT_TERMINATION: &str = "aws4_request";
/// Prefix prepended to the secret before the first derivation step.
pub const DEFAULT_SECRET_PREFIX: &str = "AWS4";

// Env values used to load config.
pub const AWS_ACCESS_KEY_ID: &str = "AWS_ACCESS_KEY_ID";
pub const AWS_SECRET_ACCESS_KEY: &str = "AWS_SECRET_ACCESS_KEY";
pub const AWS_REGION: &str = "AWS_REGION";
pub const AWS_SIGV4_CREDENTIAL: &str = "AWS_SIGV4_CREDENTIAL";
pub const AWS_SIGV4_DERIVED_KEY: &str = "AWS_SIGV4_DERIVED_KEY";
pub const AWS_SIGV4_ALGORITHM: &str = "AWS_SIGV4_ALGORITHM";

/// AsciiSet for [AWS UriEncode](https://docs.aws.amazon.com/AmazonS3/latest/API/sig-v4-header-based-auth.html)
///
/// Used in query when re-encoding is enabled: every byte except the
/// unreserved characters 'A'-'Z', 'a'-'z', '0'-'9', '-', '.', '_', and '~'.
pub static AWS_QUERY_ENCODE_SET: AsciiSet = NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');
