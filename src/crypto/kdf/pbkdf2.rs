//! src/crypto/kdf/pbkdf2.rs

use crate::aliases::SecretBytes;
use crate::consts::{MAX_DIGEST_SIZE, PBKDF2_MIN_ITER};
use crate::crypto::hmac::HmacKey;
use crate::crypto::primitive::HashPrimitive;
use crate::error::Pbkdf2Error;
use crate::request::{DerivationRequest, DerivedKey};
use crate::utils::xor_in_place;

use zeroize::{Zeroize, Zeroizing};

/// Derive PBKDF2-HMAC-`H` directly into `out`.
///
/// `out.len()` is the derived key length. The password is keyed into a single [`HmacKey`]
/// that serves every `U_j` of every block.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidParameter`] if `iterations == 0` or `out` is empty. Checked
///   before any hashing.
/// - [`Pbkdf2Error::HashFailure`] if the primitive fails. `out` is zeroed first.
///
/// # Example
///
/// ```
/// use pbkdf2_hmac_rs::pbkdf2_hmac;
/// use sha1::Sha1;
///
/// let mut key = [0u8; 20];
/// pbkdf2_hmac::<Sha1>(b"password", b"salt", 2, &mut key)?;
/// assert_eq!(hex::encode(key), "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957");
/// # Ok::<(), pbkdf2_hmac_rs::Pbkdf2Error>(())
/// ```
pub fn pbkdf2_hmac<H: HashPrimitive>(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    if iterations < PBKDF2_MIN_ITER {
        return Err(Pbkdf2Error::InvalidParameter(
            "PBKDF2 iterations must be ≥1".into(),
        ));
    }
    if out.is_empty() {
        return Err(Pbkdf2Error::InvalidParameter(
            "PBKDF2 output length must be ≥1".into(),
        ));
    }

    let result = HmacKey::<H>::new(password)
        .and_then(|prf| fill_blocks(&prf, salt, iterations, out));

    if result.is_err() {
        out.zeroize();
    }
    result
}

/// `T_1 || T_2 || ... || T_l`, with the last block truncated to fit `out`.
fn fill_blocks<H: HashPrimitive>(
    prf: &HmacKey<H>,
    salt: &[u8],
    iterations: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    let h_len = H::DIGEST_SIZE;

    let mut u = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
    let mut next = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);
    let mut block = Zeroizing::new([0u8; MAX_DIGEST_SIZE]);

    for (index, chunk) in out.chunks_mut(h_len).enumerate() {
        let block_index = u32::try_from(index + 1).map_err(|_| {
            Pbkdf2Error::InvalidParameter("PBKDF2 derived key too long".into())
        })?;

        // U_1 = PRF(P, S || INT(i))
        prf.mac_into(&[salt, &block_index.to_be_bytes()], &mut u[..h_len])?;
        block[..h_len].copy_from_slice(&u[..h_len]);

        // U_j = PRF(P, U_{j-1}); T_i ^= U_j
        for _ in 1..iterations {
            prf.mac_into(&[&u[..h_len]], &mut next[..h_len])?;
            std::mem::swap(&mut *u, &mut *next);
            xor_in_place(&mut block[..h_len], &u[..h_len]);
        }

        chunk.copy_from_slice(&block[..chunk.len()]);
    }

    Ok(())
}

/// Run the derivation described by `request` and hand the key to the caller.
///
/// Dispatches through the request's [`HashDescriptor`](crate::HashDescriptor) to the
/// monomorphized [`pbkdf2_hmac`] for that algorithm.
///
/// # Thread Safety
///
/// All state is call-local. Independent derivations may run concurrently on different
/// threads; a single derivation blocks its caller until done.
///
/// # Example
///
/// ```
/// use pbkdf2_hmac_rs::{derive, resolve, DerivationRequest};
///
/// let request = DerivationRequest::new(resolve("SHA-256")?, b"password", b"salt", 1, 32)?;
/// let key = derive(&request)?;
/// assert_eq!(
///     key.to_hex(),
///     "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b"
/// );
/// # Ok::<(), pbkdf2_hmac_rs::Pbkdf2Error>(())
/// ```
pub fn derive(request: &DerivationRequest) -> Result<DerivedKey, Pbkdf2Error> {
    let mut out = SecretBytes::new(vec![0u8; request.output_len() as usize]);
    request.algorithm().pbkdf2_into(
        request.password(),
        request.salt(),
        request.iterations(),
        &mut out,
    )?;
    Ok(DerivedKey::from_secret(out))
}
