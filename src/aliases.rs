//! # Type Aliases
//!
//! ## Hash Primitives
//! Re-exported RustCrypto digests that implement [`HashPrimitive`](crate::HashPrimitive):
//! [`Md5`], [`Sha1`], [`Sha224`], [`Sha256`], [`Sha384`], [`Sha512`].
//!
//! ## HMAC Keys
//! - [`HmacMd5`] / [`HmacSha1`] - legacy compatibility
//! - [`HmacSha224`] / [`HmacSha256`] - 64-byte block SHA-2
//! - [`HmacSha384`] / [`HmacSha512`] - 128-byte block SHA-2
//!
//! ## Secrets
//! - [`SecretBytes`] - heap buffer zeroed on drop

use crate::crypto::hmac::HmacKey;

pub use md5::Md5;
pub use sha1::Sha1;
pub use sha2::{Sha224, Sha256, Sha384, Sha512};

// ─────────────────────────────────────────────────────────────────────────────
// HMAC keys
// ─────────────────────────────────────────────────────────────────────────────
pub type HmacMd5 = HmacKey<Md5>;
pub type HmacSha1 = HmacKey<Sha1>;
pub type HmacSha224 = HmacKey<Sha224>;
pub type HmacSha256 = HmacKey<Sha256>;
pub type HmacSha384 = HmacKey<Sha384>;
pub type HmacSha512 = HmacKey<Sha512>;

// ─────────────────────────────────────────────────────────────────────────────
// Secrets
// ─────────────────────────────────────────────────────────────────────────────
pub type SecretBytes = zeroize::Zeroizing<Vec<u8>>;
