//! src/crypto/compare.rs
//! Accumulate-then-reduce equality check for derived keys and expected hashes

use std::hint::black_box;

/// Compare two byte sequences without an early exit on the first differing byte.
///
/// The accumulator is seeded with `a.len() ^ b.len()`, then every byte pair within the
/// shorter length is XORed and ORed in. The result is `accumulator == 0`.
///
/// # Timing
///
/// For equal-length inputs the running time does not depend on where (or whether) the
/// inputs differ.
///
/// **Known leak:** the loop runs `min(a.len(), b.len())` times, so a length mismatch is
/// observable through timing. Lengths of hash outputs are not secret, and this is the
/// documented behaviour; it is not hidden.
///
/// # Example
///
/// ```
/// use pbkdf2_hmac_rs::constant_time_eq;
///
/// assert!(constant_time_eq(b"abc", b"abc"));
/// assert!(!constant_time_eq(b"abc", b"abd"));
/// assert!(!constant_time_eq(b"abc", b"abcd"));
/// ```
#[inline(never)]
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    let mut acc: usize = a.len() ^ b.len();
    for (x, y) in a.iter().zip(b.iter()) {
        acc |= usize::from(black_box(*x ^ *y));
    }
    black_box(acc) == 0
}
