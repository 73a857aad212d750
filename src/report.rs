//! # Report
//!
//! Caller-facing output of a derivation: the hex string, or a match/mismatch verdict against
//! an expected hash.
//!
//! This is the only module that logs. Advisories become `tracing` warnings here. Request
//! metadata is logged at debug level. Passwords, salts and key bytes are never logged.

use crate::codec::decode_hex;
use crate::crypto::compare::constant_time_eq;
use crate::crypto::kdf::pbkdf2::derive;
use crate::error::Pbkdf2Error;
use crate::request::{DerivationRequest, DerivedKey};

use std::fmt;
use tracing::{debug, warn};

/// Outcome of checking a derivation against an expected hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    Match,
    /// `actual` as lower-case hex; `expected` exactly as the caller supplied it.
    Mismatch { actual: String, expected: String },
}

impl Verification {
    #[inline]
    pub fn is_match(&self) -> bool {
        matches!(self, Verification::Match)
    }
}

/// Renders the legacy one-line result: `1`, or `0 <actual> <expected>`.
impl fmt::Display for Verification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verification::Match => f.write_str("1"),
            Verification::Mismatch { actual, expected } => write!(f, "0 {actual} {expected}"),
        }
    }
}

fn derive_logged(request: &DerivationRequest) -> Result<DerivedKey, Pbkdf2Error> {
    debug!(
        algorithm = request.algorithm().name(),
        iterations = request.iterations(),
        output_len = request.output_len(),
        salt_len = request.salt().len(),
        "deriving key"
    );
    for advisory in request.advisories() {
        warn!(algorithm = request.algorithm().name(), "{advisory}");
    }
    derive(request)
}

/// Derive and return the key as lower-case hex.
///
/// # Example
///
/// ```
/// use pbkdf2_hmac_rs::{derive_hex, resolve, DerivationRequest};
///
/// let request = DerivationRequest::new(resolve("SHA-1")?, "password", "salt", 1, 20)?;
/// assert_eq!(derive_hex(&request)?, "0c60c80f961f0e71f3a9b524af6012062fe037a6");
/// # Ok::<(), pbkdf2_hmac_rs::Pbkdf2Error>(())
/// ```
pub fn derive_hex(request: &DerivationRequest) -> Result<String, Pbkdf2Error> {
    Ok(derive_logged(request)?.to_hex())
}

/// Derive and compare against `expected_hex` with [`constant_time_eq`].
///
/// The expected value is decoded first, so malformed hex is reported before any hashing
/// starts. Upper-case input is accepted. The mismatch report echoes it back unchanged.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidEncoding`] if `expected_hex` is not valid hex
/// - anything [`derive`] can return
///
/// # Example
///
/// ```
/// use pbkdf2_hmac_rs::{resolve, verify_hex, DerivationRequest, Verification};
///
/// let request = DerivationRequest::new(resolve("SHA-1")?, "password", "salt", 2, 20)?;
/// let verdict = verify_hex(&request, "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957")?;
/// assert_eq!(verdict, Verification::Match);
/// assert_eq!(verdict.to_string(), "1");
/// # Ok::<(), pbkdf2_hmac_rs::Pbkdf2Error>(())
/// ```
pub fn verify_hex(
    request: &DerivationRequest,
    expected_hex: &str,
) -> Result<Verification, Pbkdf2Error> {
    let expected = decode_hex(expected_hex)?;
    let key = derive_logged(request)?;

    if constant_time_eq(key.as_bytes(), &expected) {
        debug!(algorithm = request.algorithm().name(), "expected hash matched");
        Ok(Verification::Match)
    } else {
        debug!(algorithm = request.algorithm().name(), "expected hash did not match");
        Ok(Verification::Mismatch {
            actual: key.to_hex(),
            expected: expected_hex.to_string(),
        })
    }
}
