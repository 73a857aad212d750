//! # Constants
//!
//! This module defines the constants used throughout the library: parameter bounds,
//! HMAC padding bytes, scratch-buffer sizes and builder defaults.

/// Minimum allowed PBKDF2 iteration count.
///
/// Zero is rejected with [`Pbkdf2Error::InvalidParameter`](crate::Pbkdf2Error::InvalidParameter).
pub const PBKDF2_MIN_ITER: u32 = 1;

/// Minimum allowed derived-key length in bytes.
pub const PBKDF2_MIN_OUTPUT_LEN: u32 = 1;

/// Iteration count below which an advisory is raised.
///
/// Purely advisory: lower counts are still computed.
pub const RECOMMENDED_MIN_ITERATIONS: u32 = 16_384;

/// Default iteration count used by [`Pbkdf2Builder`](crate::Pbkdf2Builder).
pub const DEFAULT_PBKDF2_ITERATIONS: u32 = 131_072;

/// Default salt length for randomly generated salts.
pub const DEFAULT_SALT_LEN: usize = 16;

/// HMAC inner padding byte (RFC 2104).
pub const HMAC_IPAD: u8 = 0x36;

/// HMAC outer padding byte (RFC 2104).
pub const HMAC_OPAD: u8 = 0x5c;

/// Largest block size of any supported primitive (SHA-384/SHA-512).
pub const MAX_BLOCK_SIZE: usize = 128;

/// Largest digest size of any supported primitive (SHA-512).
pub const MAX_DIGEST_SIZE: usize = 64;

/// Supported algorithm identifiers, strongest first.
pub const SUPPORTED_ALGORITHMS: [&str; 6] = ["SHA-512", "SHA-384", "SHA-256", "SHA-224", "SHA-1", "MD5"];
