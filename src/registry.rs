//! # Algorithm Registry
//!
//! Maps the user-facing algorithm names to immutable [`HashDescriptor`]s. The table is a
//! `static`, so lookups are free, side-effect-free and safe from any thread.
//!
//! | Name      | Block | Digest |
//! |-----------|-------|--------|
//! | `MD5`     | 64    | 16     |
//! | `SHA-1`   | 64    | 20     |
//! | `SHA-224` | 64    | 28     |
//! | `SHA-256` | 64    | 32     |
//! | `SHA-384` | 128   | 48     |
//! | `SHA-512` | 128   | 64     |

use crate::crypto::hmac::hmac_into;
use crate::crypto::kdf::pbkdf2::pbkdf2_hmac;
use crate::crypto::primitive::HashPrimitive;
use crate::error::Pbkdf2Error;

use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use std::fmt;
use std::str::FromStr;

type DigestFn = fn(&[u8], &mut [u8]) -> Result<(), Pbkdf2Error>;
type HmacFn = fn(&[u8], &[u8], &mut [u8]) -> Result<(), Pbkdf2Error>;
type Pbkdf2Fn = fn(&[u8], &[u8], u32, &mut [u8]) -> Result<(), Pbkdf2Error>;

/// Supported hash algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl Algorithm {
    /// Every supported algorithm, in registry order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Md5,
        Algorithm::Sha1,
        Algorithm::Sha224,
        Algorithm::Sha256,
        Algorithm::Sha384,
        Algorithm::Sha512,
    ];

    /// Registry identifier (`"MD5"`, `"SHA-1"`, ...).
    pub fn name(self) -> &'static str {
        self.descriptor().name
    }

    /// The static descriptor for this algorithm.
    pub fn descriptor(self) -> &'static HashDescriptor {
        &DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Pbkdf2Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        resolve(name).map(HashDescriptor::algorithm)
    }
}

/// Everything HMAC and PBKDF2 need to know about one hash primitive.
///
/// One instance per algorithm lives in a static table for the life of the process; it is
/// never mutated. The function pointers are the generic engines monomorphized for that
/// primitive.
///
/// Block size is the HMAC padding unit and is independent of the digest size (SHA-384 has
/// a 128-byte block and a 48-byte digest).
pub struct HashDescriptor {
    algorithm: Algorithm,
    name: &'static str,
    block_size: usize,
    digest_size: usize,
    digest: DigestFn,
    hmac: HmacFn,
    pbkdf2: Pbkdf2Fn,
}

macro_rules! descriptor {
    ($algorithm:expr, $ty:ty) => {
        HashDescriptor {
            algorithm: $algorithm,
            name: <$ty as HashPrimitive>::NAME,
            block_size: <$ty as HashPrimitive>::BLOCK_SIZE,
            digest_size: <$ty as HashPrimitive>::DIGEST_SIZE,
            digest: <$ty as HashPrimitive>::digest_into,
            hmac: hmac_into::<$ty>,
            pbkdf2: pbkdf2_hmac::<$ty>,
        }
    };
}

// Indexed by `Algorithm as usize`; order must match the enum.
static DESCRIPTORS: [HashDescriptor; 6] = [
    descriptor!(Algorithm::Md5, Md5),
    descriptor!(Algorithm::Sha1, Sha1),
    descriptor!(Algorithm::Sha224, Sha224),
    descriptor!(Algorithm::Sha256, Sha256),
    descriptor!(Algorithm::Sha384, Sha384),
    descriptor!(Algorithm::Sha512, Sha512),
];

impl HashDescriptor {
    /// Which algorithm this descriptor belongs to.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Registry identifier.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// HMAC padding unit in bytes.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Native digest length in bytes.
    pub fn digest_size(&self) -> usize {
        self.digest_size
    }

    /// Plain digest of `input`.
    pub fn digest(&self, input: &[u8]) -> Result<Vec<u8>, Pbkdf2Error> {
        let mut out = vec![0u8; self.digest_size];
        (self.digest)(input, &mut out)?;
        Ok(out)
    }

    /// `HMAC(key, message)` with this primitive.
    pub fn hmac(&self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, Pbkdf2Error> {
        let mut out = vec![0u8; self.digest_size];
        (self.hmac)(key, message, &mut out)?;
        Ok(out)
    }

    /// PBKDF2 with this primitive, writing `out.len()` bytes.
    ///
    /// Same contract as [`pbkdf2_hmac`].
    pub fn pbkdf2_into(
        &self,
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        out: &mut [u8],
    ) -> Result<(), Pbkdf2Error> {
        (self.pbkdf2)(password, salt, iterations, out)
    }
}

impl fmt::Debug for HashDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashDescriptor")
            .field("name", &self.name)
            .field("block_size", &self.block_size)
            .field("digest_size", &self.digest_size)
            .finish_non_exhaustive()
    }
}

impl PartialEq for HashDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.algorithm == other.algorithm
    }
}

impl Eq for HashDescriptor {}

/// Look up a descriptor by its exact, case-sensitive name.
///
/// # Errors
///
/// [`Pbkdf2Error::UnknownAlgorithm`] for any name outside
/// `{"MD5", "SHA-1", "SHA-224", "SHA-256", "SHA-384", "SHA-512"}`.
///
/// # Example
///
/// ```
/// use pbkdf2_hmac_rs::resolve;
///
/// let sha384 = resolve("SHA-384")?;
/// assert_eq!((sha384.block_size(), sha384.digest_size()), (128, 48));
/// assert!(resolve("sha-384").is_err());
/// # Ok::<(), pbkdf2_hmac_rs::Pbkdf2Error>(())
/// ```
pub fn resolve(name: &str) -> Result<&'static HashDescriptor, Pbkdf2Error> {
    DESCRIPTORS
        .iter()
        .find(|descriptor| descriptor.name == name)
        .ok_or_else(|| Pbkdf2Error::UnknownAlgorithm(name.to_string()))
}
