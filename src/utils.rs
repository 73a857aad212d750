// ============================================================================
// FILE: src/utils.rs
// ============================================================================

//! Utility functions used across the library.

/// XORs `other` into `acc` byte by byte.
///
/// Used by the PBKDF2 inner loop to fold each `U_j` into the running block `T_i`, and by
/// the HMAC key schedule to apply the pad bytes.
///
/// # Panics (by contract)
///
/// Panics if `other.len() < acc.len()`. Never hit in correct usage: every caller slices both
/// buffers to the primitive's digest or block size.
#[inline(always)]
pub fn xor_in_place(acc: &mut [u8], other: &[u8]) {
    let n = acc.len();
    for (a, b) in acc.iter_mut().zip(&other[..n]) {
        *a ^= *b;
    }
}

/// Writes `key_block[i] ^ pad` into `output[i]` for every byte of `output`.
///
/// `key_block` is the zero-padded HMAC key; `pad` is [`HMAC_IPAD`](crate::consts::HMAC_IPAD)
/// or [`HMAC_OPAD`](crate::consts::HMAC_OPAD).
#[inline(always)]
pub fn xor_pad(key_block: &[u8], pad: u8, output: &mut [u8]) {
    for (out, k) in output.iter_mut().zip(key_block) {
        *out = *k ^ pad;
    }
}
