//! # Key Derivation Functions (KDF)
//!
//! ## Modules
//!
//! - [`pbkdf2`] - PBKDF2 (RFC 8018 §5.2) over HMAC with any supported hash
//!
//! ## Usage
//!
//! Most callers go through [`derive`](crate::derive) with a
//! [`DerivationRequest`](crate::DerivationRequest). The generic [`pbkdf2::pbkdf2_hmac`] is
//! exposed for callers that pick the hash at compile time and own the output buffer.

pub mod pbkdf2;
