// src/lib.rs

//! PBKDF2 (RFC 8018) over HMAC with MD5, SHA-1, SHA-224, SHA-256, SHA-384 or SHA-512.
//!
//! The derived key comes back as bytes or lower-case hex. It can also be checked against an
//! expected hex value with an accumulate-then-reduce comparator.
//!
//! ```
//! use pbkdf2_hmac_rs::{derive, resolve, DerivationRequest};
//!
//! let request = DerivationRequest::new(resolve("SHA-512")?, "password", "salt", 1, 64)?;
//! assert_eq!(derive(&request)?.len(), 64);
//! # Ok::<(), pbkdf2_hmac_rs::Pbkdf2Error>(())
//! ```

pub mod aliases;
pub mod builders;
pub mod codec;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod registry;
pub mod report;
pub mod request;
pub mod utils;

// High-level API: what most callers import
pub use builders::pbkdf2_builder::Pbkdf2Builder;
pub use crypto::kdf::pbkdf2::derive;
pub use error::Pbkdf2Error;
pub use registry::{resolve, Algorithm, HashDescriptor};
pub use report::{derive_hex, verify_hex, Verification};
pub use request::{Advisory, DerivationRequest, DerivedKey};

// Engine-level building blocks for compile-time algorithm selection
pub use codec::{decode_hex, encode_hex};
pub use crypto::compare::constant_time_eq;
pub use crypto::hmac::{hmac, HmacKey};
pub use crypto::kdf::pbkdf2::pbkdf2_hmac;
pub use crypto::primitive::HashPrimitive;
