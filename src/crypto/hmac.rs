//! src/crypto/hmac.rs
//! HMAC (RFC 2104) over any [`HashPrimitive`], with the pad blocks absorbed once per key

use crate::consts::{HMAC_IPAD, HMAC_OPAD, MAX_BLOCK_SIZE, MAX_DIGEST_SIZE};
use crate::crypto::primitive::HashPrimitive;
use crate::error::Pbkdf2Error;
use crate::utils::xor_pad;
use zeroize::Zeroizing;

/// A keyed HMAC instance.
///
/// Construction derives `K ^ ipad` and `K ^ opad` and absorbs each into its own hash state;
/// every later MAC clones those states instead of re-hashing the pads. PBKDF2 builds one
/// `HmacKey` per derivation and reuses it for every `U_j` of every block.
///
/// The pad blocks only live in zeroize-on-drop scratch during [`HmacKey::new`]. The keyed
/// states are reset on drop, and the per-call clones are reset as they are finalized.
#[derive(Clone)]
pub struct HmacKey<H: HashPrimitive> {
    inner: H,
    outer: H,
}

impl<H: HashPrimitive> HmacKey<H> {
    /// Build the keyed state.
    ///
    /// Keys longer than the block size are first replaced by their digest; shorter keys are
    /// zero-padded to the block size.
    pub fn new(key: &[u8]) -> Result<Self, Pbkdf2Error> {
        let block_size = H::BLOCK_SIZE;
        let mut key_block = Zeroizing::new([0u8; MAX_BLOCK_SIZE]);

        if key.len() > block_size {
            H::digest_into(key, &mut key_block[..H::DIGEST_SIZE])?;
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut pad = Zeroizing::new([0u8; MAX_BLOCK_SIZE]);

        xor_pad(&key_block[..block_size], HMAC_IPAD, &mut pad[..block_size]);
        let mut inner = H::new();
        inner.update(&pad[..block_size]);

        xor_pad(&key_block[..block_size], HMAC_OPAD, &mut pad[..block_size]);
        let mut outer = H::new();
        outer.update(&pad[..block_size]);

        Ok(Self { inner, outer })
    }

    /// MAC the concatenation of `parts` into `out` (exactly `H::DIGEST_SIZE` bytes).
    ///
    /// Taking the message in parts lets PBKDF2 feed `salt || BE32(i)` without building the
    /// joined buffer.
    #[inline]
    pub fn mac_into(&self, parts: &[&[u8]], out: &mut [u8]) -> Result<(), Pbkdf2Error> {
        let mut inner = self.inner.clone();
        for part in parts {
            inner.update(part);
        }

        let mut inner_digest = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
        inner.finalize_into(&mut inner_digest[..H::DIGEST_SIZE])?;

        let mut outer = self.outer.clone();
        outer.update(&inner_digest[..H::DIGEST_SIZE]);
        outer.finalize_into(out)
    }

    /// MAC `message` and return a freshly allocated tag.
    pub fn mac(&self, message: &[u8]) -> Result<Vec<u8>, Pbkdf2Error> {
        let mut tag = vec![0u8; H::DIGEST_SIZE];
        self.mac_into(&[message], &mut tag)?;
        Ok(tag)
    }
}

impl<H: HashPrimitive> Drop for HmacKey<H> {
    fn drop(&mut self) {
        self.inner.wipe();
        self.outer.wipe();
    }
}

impl<H: HashPrimitive> std::fmt::Debug for HmacKey<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HmacKey")
            .field("algorithm", &H::NAME)
            .finish_non_exhaustive()
    }
}

/// One-shot `HMAC-H(key, message)`.
#[inline]
pub fn hmac<H: HashPrimitive>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, Pbkdf2Error> {
    HmacKey::<H>::new(key)?.mac(message)
}

/// One-shot `HMAC-H(key, message)` written into a caller buffer of `H::DIGEST_SIZE` bytes.
#[inline]
pub fn hmac_into<H: HashPrimitive>(
    key: &[u8],
    message: &[u8],
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    HmacKey::<H>::new(key)?.mac_into(&[message], out)
}
