//! src/builders/pbkdf2_builder.rs
//! PBKDF2-HMAC request builder

use crate::consts::{DEFAULT_PBKDF2_ITERATIONS, DEFAULT_SALT_LEN};
use crate::crypto::kdf::pbkdf2::derive;
use crate::error::Pbkdf2Error;
use crate::registry::{resolve, Algorithm, HashDescriptor};
use crate::request::{DerivationRequest, DerivedKey};

/// PBKDF2-HMAC derivation builder
///
/// Defaults are SHA-512, [`DEFAULT_PBKDF2_ITERATIONS`] (131,072), an empty salt and an
/// output length equal to the algorithm's native digest size.
///
/// Parameters are only validated by [`build`](Self::build), so zero iterations or a zero
/// output length surface there as [`Pbkdf2Error::InvalidParameter`].
///
/// # Thread Safety
///
/// This type is **thread-safe** (`Send + Sync`). All operations are pure.
#[derive(Debug, Clone)]
pub struct Pbkdf2Builder {
    algorithm: &'static HashDescriptor,
    iterations: u32,
    output_len: Option<u32>,
    salt: Vec<u8>,
}

impl Pbkdf2Builder {
    /// Create builder with strong defaults
    #[must_use]
    pub fn new() -> Self {
        Self {
            algorithm: Algorithm::Sha512.descriptor(),
            iterations: DEFAULT_PBKDF2_ITERATIONS,
            output_len: None,
            salt: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm.descriptor();
        self
    }

    /// Select the algorithm by registry name (`"SHA-256"`, `"MD5"`, ...).
    pub fn with_algorithm_name(mut self, name: &str) -> Result<Self, Pbkdf2Error> {
        self.algorithm = resolve(name)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    /// Derived key length in bytes. Unset means the native digest size.
    #[must_use]
    pub fn with_output_len(mut self, output_len: u32) -> Self {
        self.output_len = Some(output_len);
        self
    }

    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<Vec<u8>>) -> Self {
        self.salt = salt.into();
        self
    }

    /// Replace the salt with `len` bytes from the OS RNG.
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn with_random_salt(mut self, len: usize) -> Self {
        use rand::RngCore;

        let mut salt = vec![0u8; len];
        rand::rngs::OsRng.fill_bytes(&mut salt);
        self.salt = salt;
        self
    }

    /// Replace the salt with [`DEFAULT_SALT_LEN`] (16) bytes from the OS RNG.
    #[cfg(feature = "rand")]
    #[must_use]
    pub fn with_default_random_salt(self) -> Self {
        self.with_random_salt(DEFAULT_SALT_LEN)
    }

    /// Current salt (for storage alongside the derived hash).
    #[must_use]
    pub fn salt(&self) -> &[u8] {
        &self.salt
    }

    #[must_use]
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }

    #[must_use]
    pub fn algorithm(&self) -> &'static HashDescriptor {
        self.algorithm
    }

    /// Effective output length, falling back to the native digest size.
    #[must_use]
    pub fn output_len(&self) -> u32 {
        // Digest sizes are at most 64, so the cast is lossless.
        self.output_len
            .unwrap_or(self.algorithm.digest_size() as u32)
    }

    /// Freeze the configuration into a validated request.
    pub fn build(&self, password: impl AsRef<[u8]>) -> Result<DerivationRequest, Pbkdf2Error> {
        DerivationRequest::new(
            self.algorithm,
            password,
            &self.salt,
            self.iterations,
            self.output_len(),
        )
    }

    /// Convenience: build and derive in one step.
    pub fn derive(&self, password: impl AsRef<[u8]>) -> Result<DerivedKey, Pbkdf2Error> {
        derive(&self.build(password)?)
    }
}

impl Default for Pbkdf2Builder {
    fn default() -> Self {
        Self::new()
    }
}
