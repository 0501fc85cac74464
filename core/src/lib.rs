//! Core components for computing request signatures.
//!
//! This crate provides the foundational types shared by the signatory
//! services. It holds no signing algorithm of its own; services such as
//! `signatory-aws-v4` build on top of it.
//!
//! ## Overview
//!
//! - [`Error`] and [`ErrorKind`]: the single error type every operation returns
//! - [`hash::HashFamily`]: the digest and HMAC primitives, selected once at configuration time
//! - [`time`]: UTC timestamp formatting and parsing used in signing scopes
//! - [`Env`]: environment variable access, with [`OsEnv`] and [`StaticEnv`] implementations
//!
//! ## Example
//!
//! ```
//! use signatory_core::hash::HashFamily;
//!
//! let family: HashFamily = "AWS4-HMAC-SHA256".parse().unwrap();
//! assert_eq!(
//!     family.hex_digest(b""),
//!     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
//! );
//! ```
//!
//! ## Utilities
//!
//! - [`hash`]: Cryptographic hashing utilities
//! - [`time`]: Time manipulation utilities
//! - [`utils`]: General utilities including data redaction

// Make sure all our public APIs have docs.
#![warn(missing_docs)]

pub mod hash;
pub mod time;
pub mod utils;

mod env;
pub use env::Env;
pub use env::OsEnv;
pub use env::StaticEnv;

mod error;
pub use error::{Error, ErrorKind, Result};
