//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All fallible operations return [`Result<T, Pbkdf2Error>`](Pbkdf2Error). Every variant is
//! recoverable; deciding whether to abort is left to the caller.

use crate::consts::SUPPORTED_ALGORITHMS;
use thiserror::Error;

/// The error type for all key-derivation operations.
///
/// No operation that returns this error leaves partial output behind: derivation buffers
/// are zeroed before the error is handed back.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Pbkdf2Error {
    /// The algorithm name is not one of the supported identifiers.
    ///
    /// Lookup is exact and case-sensitive, so `"sha-256"` and `"Sha256"` both land here.
    /// The contained value is the rejected name.
    #[error(
        "Unknown algorithm: '{0}' (valid values {valid})",
        valid = SUPPORTED_ALGORITHMS.join("|")
    )]
    UnknownAlgorithm(String),

    /// A numeric parameter is out of range.
    ///
    /// Raised for:
    /// - zero iterations
    /// - zero output length
    /// - a derived key that would need more than `u32::MAX` blocks
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed hexadecimal input (odd length or a non-hex character).
    ///
    /// Wraps [`hex::FromHexError`] and is created automatically by `?` on decode failures.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(#[from] hex::FromHexError),

    /// The underlying hash primitive could not produce its digest.
    #[error("Hash failure: {0}")]
    HashFailure(String),
}
