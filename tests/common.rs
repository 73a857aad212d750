//! tests/common.rs
//! Common constants and reference implementations shared across test files

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use md5::Md5;
use pbkdf2_hmac_rs::Algorithm;
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};

/// Fast iteration count for tests - performance testing is in benches/
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATIONS: u32 = 5;

#[allow(dead_code)] // Used across multiple test files
pub const TEST_PASSWORD: &str = "password";

#[allow(dead_code)] // Used across multiple test files
pub const TEST_SALT: &str = "salt";

/// Common iteration count vectors for testing various iteration values
#[allow(dead_code)] // Used across multiple test files
pub const TEST_ITERATION_VALUES: &[u32] = &[1, 2, TEST_ITERATIONS, 64];

/// PBKDF2 from the RustCrypto `pbkdf2` crate, used as an oracle.
#[allow(dead_code)] // Used across multiple test files
pub fn reference_pbkdf2(
    algorithm: Algorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    output_len: usize,
) -> Vec<u8> {
    let mut out = vec![0u8; output_len];
    match algorithm {
        Algorithm::Md5 => pbkdf2::pbkdf2::<Hmac<Md5>>(password, salt, iterations, &mut out),
        Algorithm::Sha1 => pbkdf2::pbkdf2::<Hmac<Sha1>>(password, salt, iterations, &mut out),
        Algorithm::Sha224 => pbkdf2::pbkdf2::<Hmac<Sha224>>(password, salt, iterations, &mut out),
        Algorithm::Sha256 => pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, iterations, &mut out),
        Algorithm::Sha384 => pbkdf2::pbkdf2::<Hmac<Sha384>>(password, salt, iterations, &mut out),
        Algorithm::Sha512 => pbkdf2::pbkdf2::<Hmac<Sha512>>(password, salt, iterations, &mut out),
    }
    .expect("reference pbkdf2 failed");
    out
}

/// HMAC from the RustCrypto `hmac` crate, used as an oracle.
#[allow(dead_code)] // Used across multiple test files
pub fn reference_hmac(algorithm: Algorithm, key: &[u8], message: &[u8]) -> Vec<u8> {
    fn run<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Vec<u8> {
        let mut mac = <M as KeyInit>::new_from_slice(key).expect("HMAC accepts any key length");
        mac.update(message);
        mac.finalize().into_bytes().to_vec()
    }

    match algorithm {
        Algorithm::Md5 => run::<Hmac<Md5>>(key, message),
        Algorithm::Sha1 => run::<Hmac<Sha1>>(key, message),
        Algorithm::Sha224 => run::<Hmac<Sha224>>(key, message),
        Algorithm::Sha256 => run::<Hmac<Sha256>>(key, message),
        Algorithm::Sha384 => run::<Hmac<Sha384>>(key, message),
        Algorithm::Sha512 => run::<Hmac<Sha512>>(key, message),
    }
}
