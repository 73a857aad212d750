//! # Derivation Request & Derived Key
//!
//! Value types at the boundary between the caller and the PBKDF2 engine.
//!
//! - [`DerivationRequest`] - validated, immutable inputs for one derivation
//! - [`DerivedKey`] - the output bytes, zeroed on drop
//! - [`Advisory`] - non-blocking misuse hints a caller may want to surface

use crate::aliases::SecretBytes;
use crate::codec::encode_hex;
use crate::consts::{PBKDF2_MIN_ITER, PBKDF2_MIN_OUTPUT_LEN, RECOMMENDED_MIN_ITERATIONS};
use crate::error::Pbkdf2Error;
use crate::registry::HashDescriptor;

use std::fmt;

/// Inputs for a single PBKDF2 derivation.
///
/// Constructed once per call and never mutated. Construction rejects zero iterations and
/// zero output length, so a request that exists is always derivable.
///
/// The password is held in a zeroize-on-drop buffer; the salt is not secret.
#[derive(Clone)]
pub struct DerivationRequest {
    algorithm: &'static HashDescriptor,
    password: SecretBytes,
    salt: Vec<u8>,
    iterations: u32,
    output_len: u32,
}

impl DerivationRequest {
    /// Validate and capture the derivation inputs.
    ///
    /// # Errors
    ///
    /// [`Pbkdf2Error::InvalidParameter`] if `iterations == 0` or `output_len == 0`.
    pub fn new(
        algorithm: &'static HashDescriptor,
        password: impl AsRef<[u8]>,
        salt: impl AsRef<[u8]>,
        iterations: u32,
        output_len: u32,
    ) -> Result<Self, Pbkdf2Error> {
        if iterations < PBKDF2_MIN_ITER {
            return Err(Pbkdf2Error::InvalidParameter(
                "You must select at least one iteration".into(),
            ));
        }
        if output_len < PBKDF2_MIN_OUTPUT_LEN {
            return Err(Pbkdf2Error::InvalidParameter(
                "You must select at least one byte of output length".into(),
            ));
        }

        Ok(Self {
            algorithm,
            password: SecretBytes::new(password.as_ref().to_vec()),
            salt: salt.as_ref().to_vec(),
            iterations,
            output_len,
        })
    }

    #[inline]
    pub fn algorithm(&self) -> &'static HashDescriptor {
        self.algorithm
    }

    #[inline]
    pub fn password(&self) -> &[u8] {
        &self.password
    }

    #[inline]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    #[inline]
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Requested derived-key length in bytes.
    #[inline]
    pub fn output_len(&self) -> u32 {
        self.output_len
    }

    /// Advisories for this request, in a stable order. Empty when nothing looks off.
    ///
    /// Pure: nothing is logged here. [`report`](crate::report) turns these into warnings.
    pub fn advisories(&self) -> Vec<Advisory> {
        let mut advisories = Vec::new();

        let digest_size = self.algorithm.digest_size();
        if self.output_len as usize > digest_size {
            advisories.push(Advisory::OutputExceedsDigest {
                algorithm: self.algorithm.name(),
                output_len: self.output_len,
                digest_size,
            });
        }
        if self.iterations < RECOMMENDED_MIN_ITERATIONS {
            advisories.push(Advisory::LowIterationCount {
                iterations: self.iterations,
                recommended: RECOMMENDED_MIN_ITERATIONS,
            });
        }

        advisories
    }
}

impl fmt::Debug for DerivationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DerivationRequest")
            .field("algorithm", &self.algorithm.name())
            .field("password", &"[REDACTED]")
            .field("salt_len", &self.salt.len())
            .field("iterations", &self.iterations)
            .field("output_len", &self.output_len)
            .finish()
    }
}

/// Non-blocking hints about a request. None of them stop the computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// More output than the hash natively produces (suspicious for password hashing).
    OutputExceedsDigest {
        algorithm: &'static str,
        output_len: u32,
        digest_size: usize,
    },
    /// Iteration count below [`RECOMMENDED_MIN_ITERATIONS`].
    LowIterationCount { iterations: u32, recommended: u32 },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::OutputExceedsDigest {
                algorithm,
                output_len,
                digest_size,
            } => write!(
                f,
                "output length {output_len} exceeds the {digest_size}-byte native size of \
                 {algorithm}; for password hashing keep it at or below the native size"
            ),
            Advisory::LowIterationCount {
                iterations,
                recommended,
            } => write!(
                f,
                "{iterations} iterations is below the recommended minimum of {recommended}"
            ),
        }
    }
}

/// Derived key bytes, exactly `output_len` long.
///
/// Ownership passes to the caller. The buffer is zeroed when dropped and `Debug` never
/// prints the bytes. Compare keys with [`constant_time_eq`](crate::constant_time_eq).
#[derive(Clone)]
pub struct DerivedKey(SecretBytes);

impl DerivedKey {
    pub(crate) fn from_secret(bytes: SecretBytes) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lower-case hex rendering (two digits per byte).
    pub fn to_hex(&self) -> String {
        encode_hex(&self.0)
    }
}

impl AsRef<[u8]> for DerivedKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for DerivedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DerivedKey([REDACTED; {}])", self.0.len())
    }
}
