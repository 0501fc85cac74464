//! AWS Signature Version 4 signer.
//!
//! Computes the canonical request, signing key, signature and
//! `Authorization` header for a request. Nothing here performs I/O: the
//! caller hands over method, url, headers and payload and gets strings back.
//!
//! ## Example
//!
//! ```
//! use signatory_aws_v4::{Config, RequestSigner, SigningRequest};
//!
//! let signer = RequestSigner::new(Config {
//!     credential: Some("AKIDEXAMPLE/20110909/us-east-1/iam/aws4_request".to_string()),
//!     secret_access_key: Some("wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let req = SigningRequest::new("POST", "http://iam.amazonaws.com/")
//!     .with_header("Host", "iam.amazonaws.com")
//!     .with_header("X-Amz-Date", "20110909T233600Z")
//!     .with_header("Content-Type", "application/x-www-form-urlencoded; charset=utf-8")
//!     .with_body("Action=ListUsers&Version=2010-05-08");
//!
//! assert_eq!(
//!     signer.signature("20110909T233600Z", &req)?,
//!     "ced6826de92d2bdeed8f846f0bf508e8559e98e4b0199114b84c54174deb456c"
//! );
//! # Ok::<(), signatory_core::Error>(())
//! ```

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

mod config;
pub use config::Config;

mod credential;
pub use credential::Credential;
pub use credential::CredentialScope;
pub use credential::KeyMaterial;

mod request;
pub use request::SigningRequest;
pub use request::SigningTime;

pub mod canonical;
pub use canonical::CanonicalRequest;

mod signing_key;
pub use signing_key::derive_signing_key;
pub use signing_key::SigningKey;

mod string_to_sign;
pub use string_to_sign::string_to_sign;

mod sign_request;
pub use sign_request::RequestSigner;

mod constants;
pub use constants::DEFAULT_ALGORITHM;
pub use constants::DEFAULT_SECRET_PREFIX;
pub use constants::DEFAULT_TERMINATION;
