//! src/crypto/primitive.rs
//! Hash primitive contract: thin adapter over the RustCrypto `digest` 0.10 types

use crate::error::Pbkdf2Error;
use digest::typenum::Unsigned;
use digest::{core_api::BlockSizeUser, Digest, Output, OutputSizeUser, Reset};
use md5::Md5;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use std::sync::atomic::{compiler_fence, Ordering};

/// A hash function usable by the HMAC and PBKDF2 engines.
///
/// Implementations are byte-for-byte conformant to RFC 1321 / FIPS 180-4; the actual
/// compression functions come from the vetted RustCrypto crates. `Clone` is required so a
/// state primed with a pad block can be reused for every message.
pub trait HashPrimitive: Clone {
    /// Registry identifier, e.g. `"SHA-256"`.
    const NAME: &'static str;
    /// HMAC padding unit in bytes.
    const BLOCK_SIZE: usize;
    /// Native output length in bytes.
    const DIGEST_SIZE: usize;

    /// Fresh hashing state.
    fn new() -> Self;

    /// Absorb more input.
    fn update(&mut self, data: &[u8]);

    /// Finish and write exactly [`Self::DIGEST_SIZE`] bytes into `out`.
    ///
    /// The digest is written straight into `out` and the consumed state is wiped, so no
    /// intermediate copy of the output is left behind.
    ///
    /// # Errors
    ///
    /// [`Pbkdf2Error::HashFailure`] if `out` is not exactly `DIGEST_SIZE` bytes long.
    fn finalize_into(self, out: &mut [u8]) -> Result<(), Pbkdf2Error>;

    /// Overwrite the chaining state with the initial one.
    ///
    /// A state that has absorbed an HMAC pad block is key material; [`HmacKey`] calls this
    /// on drop.
    ///
    /// [`HmacKey`]: crate::HmacKey
    fn wipe(&mut self);

    /// One-shot digest of `input` into `out`.
    #[inline]
    fn digest_into(input: &[u8], out: &mut [u8]) -> Result<(), Pbkdf2Error> {
        let mut state = Self::new();
        state.update(input);
        state.finalize_into(out)
    }
}

macro_rules! impl_hash_primitive {
    ($ty:ty, $name:literal) => {
        impl HashPrimitive for $ty {
            const NAME: &'static str = $name;
            const BLOCK_SIZE: usize = <<$ty as BlockSizeUser>::BlockSize as Unsigned>::USIZE;
            const DIGEST_SIZE: usize = <<$ty as OutputSizeUser>::OutputSize as Unsigned>::USIZE;

            #[inline(always)]
            fn new() -> Self {
                <$ty as Digest>::new()
            }

            #[inline(always)]
            fn update(&mut self, data: &[u8]) {
                <$ty as Digest>::update(self, data);
            }

            #[inline(always)]
            fn finalize_into(self, out: &mut [u8]) -> Result<(), Pbkdf2Error> {
                let mut state = self;
                if out.len() != Self::DIGEST_SIZE {
                    state.wipe();
                    return Err(Pbkdf2Error::HashFailure(format!(
                        "{} produces {} bytes, output buffer holds {}",
                        $name,
                        Self::DIGEST_SIZE,
                        out.len()
                    )));
                }
                <$ty as Digest>::finalize_into_reset(
                    &mut state,
                    Output::<$ty>::from_mut_slice(out),
                );
                compiler_fence(Ordering::SeqCst);
                Ok(())
            }

            #[inline]
            fn wipe(&mut self) {
                <$ty as Reset>::reset(self);
                compiler_fence(Ordering::SeqCst);
            }
        }
    };
}

impl_hash_primitive!(Md5, "MD5");
impl_hash_primitive!(Sha1, "SHA-1");
impl_hash_primitive!(Sha224, "SHA-224");
impl_hash_primitive!(Sha256, "SHA-256");
impl_hash_primitive!(Sha384, "SHA-384");
impl_hash_primitive!(Sha512, "SHA-512");
